//! Error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("project not found: {0}")]
    ProjectNotFound(u32),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_project_not_found() {
        let error = Error::ProjectNotFound(99);
        assert_eq!(format!("{}", error), "project not found: 99");
    }

    #[test]
    fn test_error_display_missing_field() {
        let error = Error::MissingField("email");
        assert_eq!(format!("{}", error), "missing required field: email");
    }

    #[test]
    fn test_error_display_invalid_email() {
        let error = Error::InvalidEmail("not-an-address".to_string());
        let display = format!("{}", error);
        assert!(display.contains("invalid email"));
        assert!(display.contains("not-an-address"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::ProjectNotFound(7);
        let debug = format!("{:?}", error);
        assert!(debug.contains("ProjectNotFound"));
        assert!(debug.contains("7"));
    }
}
