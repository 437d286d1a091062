mod conda;
mod interpreter;
mod pip;

pub use conda::CondaPort;
pub use interpreter::InterpreterPort;
pub use pip::PipPort;
