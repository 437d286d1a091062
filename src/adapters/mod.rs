mod conda_command;
mod pip_command;
mod python_command;

pub use conda_command::CondaCommandAdapter;
pub use pip_command::PipCommandAdapter;
pub use python_command::PythonCommandAdapter;
