//! User-level configuration (~/.config/packget/config.toml)
//!
//! Machine-specific settings: where the pack root lives, which public
//! index to pull by default and how long downloads may take.

use crate::error::{Error, Result};
use crate::utils::download::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the pack root
pub const PACK_ROOT_ENV: &str = "CMSIS_PACK_ROOT";

/// Public index pulled by `packget index` when no URL is given
pub const DEFAULT_INDEX_URL: &str = "https://www.keil.com/pack/index.pidx";

/// User configuration loaded from ~/.config/packget/config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserConfig {
    /// Pack root directory
    pub pack_root: Option<String>,
    /// Public index URL used by `index` when none is given
    pub public_index_url: Option<String>,
    /// Download timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl UserConfig {
    pub fn index_url(&self) -> &str {
        self.public_index_url
            .as_deref()
            .unwrap_or(DEFAULT_INDEX_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/packget/` on Unix and `%APPDATA%\packget\` on Windows.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("packget"))
}

/// Get the user config file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join("config.toml"))
}

/// Load user configuration from ~/.config/packget/config.toml
///
/// Returns `None` if the config file doesn't exist.
/// Returns an error if the file exists but is invalid TOML.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(None),
    }
}

pub fn load_config_from(config_path: &Path) -> Result<Option<UserConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::Config(format!(
            "Failed to read user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let config: UserConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse user config at {}: {}",
            config_path.display(),
            e
        ))
    })?;

    Ok(Some(config))
}

/// Default pack root: `<cache_dir>/arm/packs`
pub fn default_pack_root() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("arm").join("packs"))
}

/// Decide which pack root to use.
///
/// Precedence: command-line flag, `CMSIS_PACK_ROOT`, user config, default.
/// An explicitly empty flag or variable is returned as-is so that the
/// installer can reject it.
pub fn resolve_pack_root(flag: Option<&str>, config: &UserConfig) -> Option<String> {
    if let Some(root) = flag {
        return Some(root.to_string());
    }

    if let Ok(root) = std::env::var(PACK_ROOT_ENV) {
        return Some(root);
    }

    if let Some(ref root) = config.pack_root {
        return Some(root.clone());
    }

    default_pack_root().map(|p| p.display().to_string())
}

/// Generate a template for the user config file
pub fn generate_user_config_template() -> &'static str {
    r#"# packget user configuration (machine-specific)

# Pack root directory (overridden by --pack-root and CMSIS_PACK_ROOT)
# pack_root = "/home/me/.cache/arm/packs"

# Public index downloaded by `packget index` when no URL is given
# public_index_url = "https://www.keil.com/pack/index.pidx"

# Download timeout in seconds
# timeout_secs = 300
"#
}
