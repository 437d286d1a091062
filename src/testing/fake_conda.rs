use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::CondaPort;

#[derive(Default)]
pub struct FakeConda {
    pub activated: Mutex<Vec<String>>,
    pub installs: Mutex<Vec<(String, String, Vec<String>)>>,
    pub fail_activate: bool,
    pub fail_install: bool,
}

impl FakeConda {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CondaPort for FakeConda {
    fn activate(&self, environment: &str) -> Result<(), AppError> {
        if self.fail_activate {
            return Err(AppError::CondaError {
                command: format!("conda activate {}", environment),
                details: "simulated activation failure".to_string(),
            });
        }
        self.activated.lock().unwrap().push(environment.to_string());
        Ok(())
    }

    fn install(
        &self,
        environment: &str,
        channel: &str,
        packages: &[String],
    ) -> Result<(), AppError> {
        if self.fail_install {
            return Err(AppError::CondaError {
                command: format!("conda install --channel {}", channel),
                details: "simulated install failure".to_string(),
            });
        }
        self.installs.lock().unwrap().push((
            environment.to_string(),
            channel.to_string(),
            packages.to_vec(),
        ));
        Ok(())
    }
}
