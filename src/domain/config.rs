//! Provisioning configuration loaded from `envup.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

const DEFAULT_CONFIG_FILE: &str = "envup.toml";

/// Configuration for environment provisioning.
///
/// Every field has a default matching the CI setup this tool replaces, so a
/// missing `envup.toml` is not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionConfig {
    /// Target conda environment.
    #[serde(default)]
    pub environment: EnvironmentConfig,
    /// Requirements manifest handed to pip.
    #[serde(default)]
    pub manifest: ManifestConfig,
    /// Per-platform install branches.
    #[serde(default)]
    pub platforms: PlatformsConfig,
}

/// Target conda environment settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    /// Environment name to activate and install into.
    #[serde(default = "default_env_name")]
    pub name: String,
    /// Path to the conda shell hook, relative to `$HOME`.
    #[serde(default = "default_conda_sh")]
    pub conda_sh: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self { name: default_env_name(), conda_sh: default_conda_sh() }
    }
}

fn default_env_name() -> String {
    "test".to_string()
}

fn default_conda_sh() -> String {
    "miniconda/etc/profile.d/conda.sh".to_string()
}

/// Requirements manifest settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestConfig {
    /// Path passed to `pip install -r`, relative to the working directory.
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self { path: default_manifest_path() }
    }
}

fn default_manifest_path() -> String {
    "requirements/test.txt".to_string()
}

/// Install branches keyed by recognized platform name.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformsConfig {
    #[serde(default = "default_linux_branch")]
    pub linux: ChannelInstall,
    #[serde(default = "default_osx_branch")]
    pub osx: ChannelInstall,
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        Self { linux: default_linux_branch(), osx: default_osx_branch() }
    }
}

/// One conda install invocation: packages pulled from a single channel,
/// optionally followed by an import check of the named module.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInstall {
    pub channel: String,
    pub packages: Vec<String>,
    #[serde(default)]
    pub verify_import: Option<String>,
}

fn default_linux_branch() -> ChannelInstall {
    ChannelInstall {
        channel: "pytorch".to_string(),
        packages: vec!["pytorch".to_string(), "cpuonly".to_string()],
        verify_import: Some("torch".to_string()),
    }
}

fn default_osx_branch() -> ChannelInstall {
    ChannelInstall {
        channel: "conda-forge".to_string(),
        packages: vec!["xgboost".to_string()],
        // No post-install import check on this branch.
        verify_import: None,
    }
}

impl ProvisionConfig {
    /// Load configuration from `path`, or from `envup.toml` in the working
    /// directory when present. An explicitly named file must exist; the
    /// default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(AppError::config_error(format!(
                        "Config file not found: {}",
                        explicit.display()
                    )));
                }
                Ok(toml::from_str(&fs::read_to_string(explicit)?)?)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Ok(toml::from_str(&fs::read_to_string(default)?)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
