use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PipPort;

#[derive(Default)]
pub struct FakePip {
    pub installs: Mutex<Vec<(String, PathBuf)>>,
    pub fail: bool,
}

impl FakePip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipPort for FakePip {
    fn install_manifest(&self, environment: &str, manifest: &Path) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::PipError {
                command: format!("pip install -r {}", manifest.display()),
                details: "simulated pip failure".to_string(),
            });
        }
        self.installs.lock().unwrap().push((environment.to_string(), manifest.to_path_buf()));
        Ok(())
    }
}
