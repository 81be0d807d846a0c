use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use stai_core::models::profile::{AgeGroup, Gender, Profile};
use stai_core::models::result::NormResult;
use stai_core::models::scale::ScaleType;

use crate::error::{InstrumentError, NormTableError};

mod data;

/// Highest raw score a subscale can produce.
pub const MAX_RAW_SCORE: u8 = 60;

/// Identifies one partition of the normative table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormKey {
    pub scale: ScaleType,
    pub age_group: AgeGroup,
    pub gender: Gender,
}

impl NormKey {
    pub fn new(scale: ScaleType, profile: Profile) -> Self {
        Self {
            scale,
            age_group: profile.age_group,
            gender: profile.gender,
        }
    }

    /// Every partition a complete table must define.
    pub fn all() -> impl Iterator<Item = NormKey> {
        ScaleType::ALL.into_iter().flat_map(|scale| {
            AgeGroup::ALL.into_iter().flat_map(move |age_group| {
                Gender::ALL.into_iter().map(move |gender| NormKey {
                    scale,
                    age_group,
                    gender,
                })
            })
        })
    }
}

impl fmt::Display for NormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.scale, self.age_group, self.gender)
    }
}

/// One row of the normative table: an inclusive raw score range mapped
/// to its percentile and decatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormBand {
    pub key: NormKey,
    pub min: u8,
    pub max: u8,
    pub percentile: u8,
    pub decatype: u8,
}

impl NormBand {
    pub fn contains(&self, raw_score: u8) -> bool {
        (self.min..=self.max).contains(&raw_score)
    }

    pub fn norms(&self) -> NormResult {
        NormResult {
            percentile: self.percentile,
            decatype: self.decatype,
        }
    }
}

/// Normative bands grouped by partition, each partition sorted by `min`.
#[derive(Debug, Clone, Default)]
pub struct NormTable {
    partitions: BTreeMap<NormKey, Vec<NormBand>>,
}

impl NormTable {
    /// Build and validate a table. Use [`NormTable::unchecked`] to skip
    /// validation.
    pub fn new(bands: impl IntoIterator<Item = NormBand>) -> Result<Self, NormTableError> {
        let table = Self::unchecked(bands);
        table.validate()?;
        Ok(table)
    }

    pub fn unchecked(bands: impl IntoIterator<Item = NormBand>) -> Self {
        let mut partitions: BTreeMap<NormKey, Vec<NormBand>> = BTreeMap::new();
        for band in bands {
            partitions.entry(band.key).or_default().push(band);
        }
        for bands in partitions.values_mut() {
            bands.sort_by_key(|b| (b.min, b.max));
        }
        Self { partitions }
    }

    pub fn partition(&self, key: NormKey) -> &[NormBand] {
        self.partitions.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bands(&self) -> impl Iterator<Item = &NormBand> {
        self.partitions.values().flatten()
    }

    /// Check that every partition exists and that its bands tile
    /// 0..=60 exactly, with in-range values and with percentile and
    /// decatype both non-decreasing in raw score.
    pub fn validate(&self) -> Result<(), NormTableError> {
        for key in NormKey::all() {
            let bands = self.partition(key);
            if bands.is_empty() {
                return Err(NormTableError::MissingPartition(key));
            }
            validate_partition(key, bands)?;
        }
        Ok(())
    }

    /// Find the band covering `raw_score` for the given profile and scale.
    pub fn lookup(
        &self,
        raw_score: u8,
        age_group: AgeGroup,
        gender: Gender,
        scale: ScaleType,
    ) -> Result<NormResult, InstrumentError> {
        let key = NormKey {
            scale,
            age_group,
            gender,
        };
        match self.partition(key).iter().find(|b| b.contains(raw_score)) {
            Some(band) => Ok(band.norms()),
            None => {
                tracing::error!(raw_score, %key, "no normative band covers raw score");
                Err(InstrumentError::NoMatchingBand {
                    raw_score,
                    age_group,
                    gender,
                    scale,
                })
            }
        }
    }
}

fn validate_partition(key: NormKey, bands: &[NormBand]) -> Result<(), NormTableError> {
    let mut next_expected: u16 = 0;
    let mut last_percentile = 0u8;
    let mut last_decatype = 1u8;

    for band in bands {
        if band.min > band.max {
            return Err(NormTableError::InvertedBand {
                key,
                min: band.min,
                max: band.max,
            });
        }
        if band.max > MAX_RAW_SCORE {
            return Err(NormTableError::OutOfDomain {
                key,
                min: band.min,
                max: band.max,
                limit: MAX_RAW_SCORE,
            });
        }
        if band.percentile > 100 {
            return Err(NormTableError::PercentileOutOfRange {
                key,
                percentile: band.percentile,
            });
        }
        if !(1..=10).contains(&band.decatype) {
            return Err(NormTableError::DecatypeOutOfRange {
                key,
                decatype: band.decatype,
            });
        }

        let min = u16::from(band.min);
        if min > next_expected {
            return Err(NormTableError::Gap {
                key,
                from: next_expected as u8,
                to: band.min - 1,
            });
        }
        if min < next_expected {
            return Err(NormTableError::Overlap { key, at: band.min });
        }
        if band.percentile < last_percentile {
            return Err(NormTableError::NonMonotonic { key, at: band.min });
        }
        if band.decatype < last_decatype {
            return Err(NormTableError::NonMonotonicDecatype { key, at: band.min });
        }

        last_percentile = band.percentile;
        last_decatype = band.decatype;
        next_expected = u16::from(band.max) + 1;
    }

    if next_expected <= u16::from(MAX_RAW_SCORE) {
        return Err(NormTableError::Gap {
            key,
            from: next_expected as u8,
            to: MAX_RAW_SCORE,
        });
    }
    Ok(())
}

fn builtin_bands() -> impl Iterator<Item = NormBand> {
    use AgeGroup::{Adolescent, Adult};
    use Gender::{Female, Male};
    use ScaleType::{State, Trait};

    let partitions: [(ScaleType, AgeGroup, Gender, &[data::Band]); 8] = [
        (State, Adolescent, Male, data::STATE_ADOLESCENT_MALE),
        (State, Adolescent, Female, data::STATE_ADOLESCENT_FEMALE),
        (State, Adult, Male, data::STATE_ADULT_MALE),
        (State, Adult, Female, data::STATE_ADULT_FEMALE),
        (Trait, Adolescent, Male, data::TRAIT_ADOLESCENT_MALE),
        (Trait, Adolescent, Female, data::TRAIT_ADOLESCENT_FEMALE),
        (Trait, Adult, Male, data::TRAIT_ADULT_MALE),
        (Trait, Adult, Female, data::TRAIT_ADULT_FEMALE),
    ];

    partitions
        .into_iter()
        .flat_map(|(scale, age_group, gender, rows)| {
            let key = NormKey {
                scale,
                age_group,
                gender,
            };
            rows.iter()
                .map(move |&(min, max, percentile, decatype)| NormBand {
                    key,
                    min,
                    max,
                    percentile,
                    decatype,
                })
        })
}

static BUILTIN: LazyLock<Result<NormTable, NormTableError>> =
    LazyLock::new(|| NormTable::new(builtin_bands()));

/// The compiled-in table, validated on first access.
pub fn builtin() -> Result<&'static NormTable, InstrumentError> {
    BUILTIN
        .as_ref()
        .map_err(|e| InstrumentError::InvalidNormTable(e.clone()))
}

/// Look up `raw_score` in the compiled-in table.
pub fn lookup_norm(
    raw_score: u8,
    age_group: AgeGroup,
    gender: Gender,
    scale: ScaleType,
) -> Result<NormResult, InstrumentError> {
    builtin()?.lookup(raw_score, age_group, gender, scale)
}
