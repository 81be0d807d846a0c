use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Normative age group of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AgeGroup {
    Adolescent,
    Adult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

/// Selects which partition of the normative table is consulted.
/// Items and reversed sets are the same for every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub age_group: AgeGroup,
    pub gender: Gender,
}

impl Profile {
    pub fn new(age_group: AgeGroup, gender: Gender) -> Self {
        Self { age_group, gender }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age_group: AgeGroup::Adult,
            gender: Gender::Male,
        }
    }
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 2] = [AgeGroup::Adolescent, AgeGroup::Adult];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Adolescent => "ADOLESCENT",
            AgeGroup::Adult => "ADULT",
        }
    }
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.age_group, self.gender)
    }
}

impl FromStr for AgeGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADOLESCENT" => Ok(AgeGroup::Adolescent),
            "ADULT" => Ok(AgeGroup::Adult),
            _ => Err(CoreError::UnknownVariant {
                kind: "age group",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(CoreError::UnknownVariant {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}
