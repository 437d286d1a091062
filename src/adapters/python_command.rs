use std::process::Command;

use crate::domain::AppError;
use crate::ports::InterpreterPort;

/// Adapter running the environment's Python through `conda run`.
#[derive(Debug, Clone, Default)]
pub struct PythonCommandAdapter;

impl PythonCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new("conda").args(args).output().map_err(|e| AppError::PythonError {
            command: format!("conda {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::PythonError {
                command: format!("conda {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            // Python 2 printed --version to stderr.
            Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
        } else {
            Ok(stdout)
        }
    }
}

impl InterpreterPort for PythonCommandAdapter {
    fn version(&self, environment: &str) -> Result<String, AppError> {
        self.run(&["run", "--name", environment, "python", "--version"])
    }

    fn module_version(&self, environment: &str, module: &str) -> Result<String, AppError> {
        let script = format!("import {module}; print({module}.__version__)");
        self.run(&["run", "--name", environment, "python", "-c", &script])
    }
}
