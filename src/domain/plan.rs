//! Derivation of the provisioning step sequence.

use serde::Serialize;

use crate::domain::config::{ChannelInstall, ProvisionConfig};
use crate::domain::platform::Platform;

/// One provisioning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Source the conda hook, activate the environment, refresh the lookup cache.
    Activate { environment: String },
    /// Install packages from a single channel into the environment.
    CondaInstall { channel: String, packages: Vec<String> },
    /// Install everything listed in the requirements manifest.
    PipInstall { manifest: String },
    /// Import a module and print its reported version.
    VerifyImport { module: String },
    /// Print the interpreter's version line.
    InterpreterVersion,
}

impl Step {
    /// One-line description for plan output and dry runs.
    pub fn describe(&self) -> String {
        match self {
            Step::Activate { environment } => {
                format!("activate environment '{}'", environment)
            }
            Step::CondaInstall { channel, packages } => {
                format!("conda install {} (channel: {})", packages.join(" "), channel)
            }
            Step::PipInstall { manifest } => format!("pip install -r {}", manifest),
            Step::VerifyImport { module } => format!("verify import of '{}'", module),
            Step::InterpreterVersion => "print interpreter version".to_string(),
        }
    }
}

/// The full step sequence for one platform.
#[derive(Debug, Clone, Serialize)]
pub struct InstallPlan {
    pub platform: String,
    pub steps: Vec<Step>,
}

impl InstallPlan {
    /// Derive the step sequence for `platform`.
    ///
    /// Recognized platforms get their install branch between activation and
    /// the final interpreter version line; unrecognized platforms skip the
    /// branch entirely and keep the surrounding steps.
    pub fn for_platform(platform: &Platform, config: &ProvisionConfig) -> Self {
        let mut steps = vec![Step::Activate { environment: config.environment.name.clone() }];

        match platform {
            Platform::Linux => push_branch(&mut steps, &config.platforms.linux, &config.manifest.path),
            Platform::MacOs => push_branch(&mut steps, &config.platforms.osx, &config.manifest.path),
            Platform::Unrecognized(_) => {}
        }

        steps.push(Step::InterpreterVersion);
        Self { platform: platform.label().to_string(), steps }
    }
}

fn push_branch(steps: &mut Vec<Step>, branch: &ChannelInstall, manifest: &str) {
    steps.push(Step::CondaInstall {
        channel: branch.channel.clone(),
        packages: branch.packages.clone(),
    });
    steps.push(Step::PipInstall { manifest: manifest.to_string() });
    if let Some(module) = &branch.verify_import {
        steps.push(Step::VerifyImport { module: module.clone() });
    }
}
