use std::path::Path;

use crate::domain::AppError;

/// Access to the pip package installer.
pub trait PipPort {
    /// Install every package listed in the requirements manifest. The
    /// manifest's contents and format are pip's concern, not ours.
    fn install_manifest(&self, environment: &str, manifest: &Path) -> Result<(), AppError>;
}
