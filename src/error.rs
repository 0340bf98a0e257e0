//! Configuration errors
//!
//! The simulation itself has no failure modes; only loading settings and
//! tuning from disk can fail, and the runner reports those at startup.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File (or inline document when `path` is `None`) is not valid JSON for the target type
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// Values parsed but cannot be simulated
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "failed to parse {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => write!(f, "failed to parse: {}", source),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(source: serde_json::Error) -> Self {
        ConfigError::Parse { path: None, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_invalid() {
        let err = ConfigError::Invalid("arena must be wider than an enemy".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: arena must be wider than an enemy"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(err.to_string().starts_with("failed to parse:"));
        assert!(err.source().is_some());
    }
}
