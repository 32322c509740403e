use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::derive::DerivePolicy;
use crate::domain::branch::{DEFAULT_MAINLINE_BRANCHES, DEFAULT_RELEASE_PREFIXES};
use crate::domain::SemanticVersion;
use crate::error::{GitVersionError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "gitversion.toml";

/// Represents the complete configuration for gitversion.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub derive: DeriveConfig,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_dev_prerelease() -> String {
    "dev".to_string()
}

fn default_mainline_branches() -> Vec<String> {
    DEFAULT_MAINLINE_BRANCHES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_release_prefixes() -> Vec<String> {
    DEFAULT_RELEASE_PREFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_allow_v_prefix() -> bool {
    true
}

/// Settings for the derivation rules.
///
/// The defaults give: tags first, then `release/` or `release-` branches,
/// then `0.1.0` with a `dev` pre-release off `main`/`master`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeriveConfig {
    #[serde(default = "default_version")]
    pub default_version: String,

    #[serde(default = "default_dev_prerelease")]
    pub dev_prerelease: String,

    #[serde(default = "default_mainline_branches")]
    pub mainline_branches: Vec<String>,

    #[serde(default = "default_release_prefixes")]
    pub release_prefixes: Vec<String>,

    #[serde(default = "default_allow_v_prefix")]
    pub allow_v_prefix: bool,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        DeriveConfig {
            default_version: default_version(),
            dev_prerelease: default_dev_prerelease(),
            mainline_branches: default_mainline_branches(),
            release_prefixes: default_release_prefixes(),
            allow_v_prefix: default_allow_v_prefix(),
        }
    }
}

impl Config {
    /// Turn the loaded settings into a validated [`DerivePolicy`].
    ///
    /// # Errors
    /// * `Config` - if `default_version` or `dev_prerelease` is malformed, or a
    ///   release prefix is empty
    pub fn derive_policy(&self) -> Result<DerivePolicy> {
        let cfg = &self.derive;

        let default_version = SemanticVersion::parse(&cfg.default_version).map_err(|e| {
            GitVersionError::config(format!("derive.default_version: {}", e))
        })?;
        let dev_prerelease = SemanticVersion::prerelease_label(&cfg.dev_prerelease)
            .map_err(|e| GitVersionError::config(format!("derive.dev_prerelease: {}", e)))?;

        if cfg.release_prefixes.iter().any(|p| p.is_empty()) {
            return Err(GitVersionError::config(
                "derive.release_prefixes: prefixes must not be empty",
            ));
        }

        Ok(DerivePolicy {
            default_version,
            dev_prerelease,
            mainline_branches: cfg.mainline_branches.clone(),
            release_prefixes: cfg.release_prefixes.clone(),
            allow_v_prefix: cfg.allow_v_prefix,
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitversion.toml` in current directory
/// 3. `gitversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GitVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        GitVersionError::config(format!("cannot parse {}: {}", path.display(), e))
    })
}
