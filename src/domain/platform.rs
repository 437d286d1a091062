//! Platform identifier supplied by the surrounding CI system.

use std::env;

/// Environment variable naming the build platform.
pub const PLATFORM_ENV_VAR: &str = "TRAVIS_OS_NAME";

/// Operating system family the build is running on.
///
/// Only `linux` and `osx` select an installer branch; every other value,
/// including an unset variable, selects neither. The skipped branch is a
/// silent no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    /// Any unrecognized value; the empty string stands for an unset variable.
    Unrecognized(String),
}

impl Platform {
    /// Parse a platform name by exact string equality.
    pub fn parse(value: &str) -> Self {
        match value {
            "linux" => Platform::Linux,
            "osx" => Platform::MacOs,
            other => Platform::Unrecognized(other.to_string()),
        }
    }

    /// Resolve the platform from an explicit override or the CI environment.
    pub fn resolve(override_name: Option<&str>) -> Self {
        match override_name {
            Some(name) => Platform::parse(name),
            None => match env::var(PLATFORM_ENV_VAR) {
                Ok(value) => Platform::parse(&value),
                Err(_) => Platform::Unrecognized(String::new()),
            },
        }
    }

    /// Human-readable name for progress output and plan rendering.
    pub fn label(&self) -> &str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOs => "osx",
            Platform::Unrecognized(name) if name.is_empty() => "(unset)",
            Platform::Unrecognized(name) => name,
        }
    }
}
