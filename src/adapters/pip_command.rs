use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::PipPort;

/// Adapter running pip through `conda run`, so the install lands in the
/// target environment without relying on shell activation state.
#[derive(Debug, Clone, Default)]
pub struct PipCommandAdapter;

impl PipCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new("conda").args(args).output().map_err(|e| AppError::PipError {
            command: format!("conda {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::PipError {
                command: format!("conda {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl PipPort for PipCommandAdapter {
    fn install_manifest(&self, environment: &str, manifest: &Path) -> Result<(), AppError> {
        let manifest = manifest.to_string_lossy();
        self.run(&[
            "run",
            "--name",
            environment,
            "python",
            "-m",
            "pip",
            "install",
            "-r",
            manifest.as_ref(),
        ])?;
        Ok(())
    }
}
