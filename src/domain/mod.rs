pub mod config;
pub mod error;
pub mod plan;
pub mod platform;

pub use config::{ChannelInstall, EnvironmentConfig, ManifestConfig, ProvisionConfig};
pub use error::AppError;
pub use plan::{InstallPlan, Step};
pub use platform::{PLATFORM_ENV_VAR, Platform};
