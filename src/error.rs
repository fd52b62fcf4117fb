//! Error handling module for pipstrap
//!
//! Individual installer failures are never errors: they are recorded as
//! outcomes and the run continues. The variants here cover the conditions
//! that stop a run outright.

use thiserror::Error;

/// Main error type for pipstrap
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// IO errors (writing the completion marker, reading manifests)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The installer program could not be located or started
    #[error("Failed to spawn installer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest errors (unreadable file, unexpected shape)
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pipstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

impl BootstrapError {
    /// Create a spawn error for `program`
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a manifest error
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Whether the error means the installer binary is missing from PATH
    pub fn is_installer_missing(&self) -> bool {
        matches!(
            self,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Helper for manifest errors that carry the offending path
pub fn manifest_error(path: &std::path::Path, msg: impl std::fmt::Display) -> BootstrapError {
    BootstrapError::Manifest(format!("{}: {}", path.display(), msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BootstrapError::manifest("expected a list of package names");
        assert_eq!(
            err.to_string(),
            "Manifest error: expected a list of package names"
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = BootstrapError::spawn("pip", io);
        assert_eq!(
            err.to_string(),
            "Failed to spawn installer `pip`: No such file or directory"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: BootstrapError = io_err.into();
        assert!(matches!(err, BootstrapError::Io(_)));
    }

    #[test]
    fn test_installer_missing() {
        let missing = BootstrapError::spawn(
            "pip",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(missing.is_installer_missing());

        let denied = BootstrapError::spawn(
            "pip",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!denied.is_installer_missing());
        assert!(!BootstrapError::manifest("bad").is_installer_missing());
    }

    #[test]
    fn test_manifest_error_includes_path() {
        let err = manifest_error(std::path::Path::new("deps.json"), "empty file");
        assert_eq!(err.to_string(), "Manifest error: deps.json: empty file");
    }
}
