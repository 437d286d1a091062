use crate::domain::AppError;

/// Access to the Python interpreter inside the environment.
pub trait InterpreterPort {
    /// The interpreter's version line, e.g. `Python 3.8.2`.
    fn version(&self, environment: &str) -> Result<String, AppError>;

    /// Import a module and report its `__version__` attribute.
    fn module_version(&self, environment: &str, module: &str) -> Result<String, AppError>;
}
