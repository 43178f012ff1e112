use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Config,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::Utf8Error(_) | ConvertError::ParseError(_) => ErrorCategory::Parse,
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            ConvertError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    /// 嚴重程度決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => "Check that the input exists and the output location is writable",
            ConvertError::Utf8Error(_) => "Re-encode the input as UTF-8 before piping it in",
            ConvertError::ParseError(_) => "Validate the input with a JSON linter; the whole document must be one valid JSON value",
            ConvertError::InvalidConfigValueError { .. } => "Fix the offending command-line argument and retry",
            ConvertError::ProcessingError { .. } => "Re-run with --verbose and report the log if the problem persists",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not read or write data: {}", e),
            ConvertError::Utf8Error(_) => "The input is not UTF-8 encoded text".to_string(),
            ConvertError::ParseError(e) => format!("The input is not valid JSON: {}", e),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad argument '{}': {}", field, reason)
            }
            ConvertError::ProcessingError { message } => {
                format!("Conversion failed: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_high_severity() {
        let err: ConvertError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_error_is_medium_severity() {
        let err = ConvertError::InvalidConfigValueError {
            field: "input".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("input"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = ConvertError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_processing_error_is_high_severity() {
        let err = ConvertError::ProcessingError {
            message: "render failed".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Processing);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
