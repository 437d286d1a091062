use crate::ports::{CondaPort, InterpreterPort, PipPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CondaPort, P: PipPort, I: InterpreterPort> {
    conda: C,
    pip: P,
    interpreter: I,
}

impl<C: CondaPort, P: PipPort, I: InterpreterPort> AppContext<C, P, I> {
    /// Create a new application context.
    pub fn new(conda: C, pip: P, interpreter: I) -> Self {
        Self { conda, pip, interpreter }
    }

    /// Get a reference to the conda port.
    pub fn conda(&self) -> &C {
        &self.conda
    }

    /// Get a reference to the pip port.
    pub fn pip(&self) -> &P {
        &self.pip
    }

    /// Get a reference to the interpreter port.
    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }
}
