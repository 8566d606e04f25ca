//! Error types for settings I/O and validation

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the simulation core.
///
/// Physics itself never fails: degenerate pairs produce zero force and
/// non-positive masses are a caller precondition. Only loading and
/// validating settings can go wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings value outside its accepted range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::InvalidSettings("gravity must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid settings"));
        assert!(msg.contains("gravity"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
