//! Error types for the Outreach CMS backend

use std::{error::Error as StdError, fmt};

/// Main error type for the Outreach CMS backend
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Database error
    Database(String),

    /// Image format error
    UnsupportedImageFormat {
        /// The rejected content type
        format: String,
    },

    /// File size error
    FileSizeExceeded {
        /// Actual file size
        size: u64,
        /// Maximum allowed size
        max_size: u64,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Database(msg) => write!(f, "Database error: {msg}"),
            Self::UnsupportedImageFormat { format } => {
                write!(f, "Image format not supported: {format}")
            }
            Self::FileSizeExceeded { size, max_size } => {
                write!(f, "File size {size} exceeds maximum of {max_size}")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{}", app_error).contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid database URL".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid database URL"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "title".to_string(),
            message: "Field is required".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Validation error: title - Field is required"
        );
    }

    #[test]
    fn test_database_error() {
        let error = Error::Database("Connection failed".to_string());
        assert_eq!(format!("{}", error), "Database error: Connection failed");
    }

    #[test]
    fn test_unsupported_image_format_error() {
        let error = Error::UnsupportedImageFormat {
            format: "application/pdf".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Image format not supported: application/pdf"
        );
    }

    #[test]
    fn test_file_size_exceeded_error() {
        let error = Error::FileSizeExceeded {
            size: 12_000_000,
            max_size: 10_000_000,
        };

        assert_eq!(
            format!("{}", error),
            "File size 12000000 exceeds maximum of 10000000"
        );
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "Event 123".to_string(),
        };

        assert_eq!(format!("{}", error), "Resource not found: Event 123");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(format!("{}", app_error).contains("Serialization error"));
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("Unexpected error occurred".to_string());
        assert_eq!(format!("{}", error), "Unexpected error occurred");
    }

    #[test]
    fn test_error_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let app_error = Error::from(io_error);

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Database("test".to_string());
        assert!(error.source().is_none());

        let error = Error::NotFound {
            resource: "test".to_string(),
        };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_all_error_display_variants() {
        let test_cases = vec![
            (Error::Io(io::Error::other("test")), "I/O error:"),
            (
                Error::Configuration {
                    message: "config error".to_string(),
                },
                "Configuration error: config error",
            ),
            (
                Error::Validation {
                    field: "email".to_string(),
                    message: "invalid".to_string(),
                },
                "Validation error: email - invalid",
            ),
            (
                Error::Database("db error".to_string()),
                "Database error: db error",
            ),
            (
                Error::UnsupportedImageFormat {
                    format: "text/plain".to_string(),
                },
                "Image format not supported: text/plain",
            ),
            (
                Error::FileSizeExceeded {
                    size: 200,
                    max_size: 100,
                },
                "File size 200 exceeds maximum of 100",
            ),
            (
                Error::NotFound {
                    resource: "law 42".to_string(),
                },
                "Resource not found: law 42",
            ),
            (Error::Other("other error".to_string()), "other error"),
        ];

        for (error, expected_contains) in test_cases {
            let display_str = format!("{}", error);
            assert!(
                display_str.contains(expected_contains),
                "Error display '{}' should contain '{}'",
                display_str,
                expected_contains
            );
        }
    }
}
