/// Error types for the EEEFlix directory core.
///
/// Generation, querying and featured selection are total over their inputs
/// and never produce these. They only surface at the edges: loading
/// configuration, parsing user supplied values, and writing output.
use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur around the directory core
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid featured mode: {0} (expected ranked or shuffled)")]
    InvalidMode(String),
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<::config::ConfigError> for DirectoryError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl DirectoryError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode(mode.into())
    }

    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DirectoryError::config_error("bad field");
        assert!(matches!(err, DirectoryError::ConfigError(_)));

        let err = DirectoryError::invalid_mode("random");
        assert!(matches!(err, DirectoryError::InvalidMode(_)));

        let err = DirectoryError::invalid_duration("soon");
        assert!(matches!(err, DirectoryError::InvalidDuration(_)));

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: DirectoryError = io.into();
        assert!(matches!(err, DirectoryError::IoError(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = DirectoryError::invalid_mode("random");
        assert_eq!(
            err.to_string(),
            "Invalid featured mode: random (expected ranked or shuffled)"
        );

        let err = DirectoryError::config_error("Missing required field".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field"
        );

        let err = DirectoryError::invalid_duration("expected number at 0");
        assert_eq!(err.to_string(), "Invalid duration: expected number at 0");
    }
}
