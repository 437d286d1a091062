//! envup: Provision conda-based CI build environments.
//!
//! Activates a named conda environment, installs platform-specific packages
//! plus a requirements manifest, and prints the interpreter version. Which
//! install branch runs is decided by the `TRAVIS_OS_NAME` variable (or an
//! explicit override); unrecognized platforms skip both branches.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::env;
use std::path::{Path, PathBuf};

use adapters::{CondaCommandAdapter, PipCommandAdapter, PythonCommandAdapter};
use app::AppContext;
use app::commands::{plan, provision};
use domain::{Platform, ProvisionConfig};

pub use app::commands::plan::PlanFormat;
pub use app::commands::provision::{ProvisionOptions, ProvisionReport};
pub use domain::AppError;

fn home_dir() -> Result<PathBuf, AppError> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| AppError::config_error("HOME is not set"))
}

/// Provision the build environment for the resolved platform.
///
/// Runs activation, the platform's install branch (if any), and the final
/// interpreter version check in order, aborting on the first failure.
pub fn provision(
    config_path: Option<&Path>,
    options: ProvisionOptions,
) -> Result<ProvisionReport, AppError> {
    let config = ProvisionConfig::load(config_path)?;
    let conda = CondaCommandAdapter::new(home_dir()?, &config.environment.conda_sh);
    let ctx = AppContext::new(conda, PipCommandAdapter::new(), PythonCommandAdapter::new());

    let report = provision::execute(&ctx, &config, &options)?;
    if !options.dry_run {
        println!("✅ Environment '{}' provisioned", config.environment.name);
    }
    Ok(report)
}

/// Render the step sequence `provision` would execute, without running anything.
pub fn plan(
    config_path: Option<&Path>,
    platform: Option<&str>,
    format: PlanFormat,
) -> Result<String, AppError> {
    let config = ProvisionConfig::load(config_path)?;
    let platform = Platform::resolve(platform);
    plan::render(&platform, &config, format)
}
