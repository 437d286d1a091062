mod fake_conda;
mod fake_pip;

pub use fake_conda::FakeConda;
pub use fake_pip::FakePip;
pub use fake_python::FakePython;
