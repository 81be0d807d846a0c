use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stai_core::models::profile::Profile;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaiConfig {
    /// Schema version. Missing or 0 = written before versioning, same
    /// shape as v1.
    #[serde(default)]
    pub config_version: u32,
    /// Profile used when a command does not pass `--age-group`/`--gender`.
    pub default_profile: Profile,
    /// Report template used by `score --format report` when no
    /// `--template` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

impl Default for StaiConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_profile: Profile::default(),
            report_template: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Resolve the config directory: an explicit override, else the
/// platform config dir.
pub fn config_dir(override_dir: Option<&Path>) -> eyre::Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("stai"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<StaiConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(raw_version)
        .map_err(|_| eyre::eyre!("config_version {raw_version} is out of range"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: StaiConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config if one exists, else the defaults.
pub fn load_or_default(dir: &Path) -> eyre::Result<StaiConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        tracing::debug!(dir = %dir.display(), "no config found, using defaults");
        Ok(StaiConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update stai."
        ));
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &StaiConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
