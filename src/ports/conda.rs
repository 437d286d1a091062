use crate::domain::AppError;

/// Access to the conda environment manager.
pub trait CondaPort {
    /// Source the conda shell hook, activate the named environment, and
    /// refresh the shell's executable lookup cache.
    fn activate(&self, environment: &str) -> Result<(), AppError>;

    /// Install packages into the environment from a single channel.
    fn install(&self, environment: &str, channel: &str, packages: &[String])
    -> Result<(), AppError>;
}
