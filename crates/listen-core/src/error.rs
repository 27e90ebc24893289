//! Typed errors for failures that cannot be recovered from.
//!
//! Missing inputs are empty results and per-item copy failures are
//! warnings; only failures that prevent writing at all end up here.

use std::path::PathBuf;

/// Unrecoverable installation failure.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to create destination directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read skill document {}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write skill document {}", .path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Path the failed operation targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            InstallError::CreateDir { path, .. }
            | InstallError::ReadDocument { path, .. }
            | InstallError::WriteDocument { path, .. } => path,
        }
    }
}

/// Failure loading `listen-agent.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML; the message already carries line context.
    #[error("{0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_path_and_keeps_source() {
        let err = InstallError::CreateDir {
            path: PathBuf::from("/readonly/.claude"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/readonly/.claude"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.path(), std::path::Path::new("/readonly/.claude"));
    }

    #[test]
    fn test_config_invalid_message() {
        let err = ConfigError::Invalid("skills_dir must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid config: skills_dir must not be empty");
    }
}
