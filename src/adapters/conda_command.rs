use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::CondaPort;

/// Adapter driving the `conda` executable, plus `bash` for the activation
/// sequence (the shell hook only exists as a sourceable script).
#[derive(Debug, Clone)]
pub struct CondaCommandAdapter {
    home: PathBuf,
    conda_sh: String,
}

impl CondaCommandAdapter {
    pub fn new(home: PathBuf, conda_sh: &str) -> Self {
        Self { home, conda_sh: conda_sh.to_string() }
    }

    fn hook_path(&self) -> PathBuf {
        self.home.join(&self.conda_sh)
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new(program).args(args).output().map_err(|e| AppError::CondaError {
            command: format!("{} {}", program, args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::CondaError {
                command: format!("{} {}", program, args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CondaPort for CondaCommandAdapter {
    fn activate(&self, environment: &str) -> Result<(), AppError> {
        let script = format!(
            "source {} && conda activate {} && hash -r",
            self.hook_path().display(),
            environment
        );
        self.run("bash", &["-c", &script])?;
        Ok(())
    }

    fn install(
        &self,
        environment: &str,
        channel: &str,
        packages: &[String],
    ) -> Result<(), AppError> {
        let mut args: Vec<&str> =
            vec!["install", "--yes", "--name", environment, "--channel", channel];
        for package in packages {
            args.push(package);
        }
        self.run("conda", &args)?;
        Ok(())
    }
}
