use std::path::PathBuf;

/// Failures of the launcher itself.
///
/// A delegate that runs and exits non-zero is not an error here; its
/// status is relayed as-is.
#[derive(Debug)]
pub enum LaunchError {
    /// No candidate binary exists for the detected platform
    BinaryNotFound { os: String, arch: String },
    /// A binary was resolved but could not be started
    SpawnFailed { path: PathBuf, source: anyhow::Error },
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::BinaryNotFound { os, arch } => {
                write!(
                    f,
                    "Could not find quickicon binary for your platform.\nPlatform: {}, Architecture: {}",
                    os, arch
                )
            }
            LaunchError::SpawnFailed { path, .. } => {
                write!(f, "Failed to start quickicon binary at {}", path.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::BinaryNotFound { .. } => None,
            LaunchError::SpawnFailed { source, .. } => Some(source.as_ref()),
        }
    }
}
