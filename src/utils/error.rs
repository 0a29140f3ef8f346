use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Input directory not found: {path}")]
    MissingInputDirectory { path: String },

    #[error("Failed to load module {path}: {message}")]
    FragmentParseError { path: String, message: String },

    #[error("No module files found in {path}")]
    NoFragmentsFound { path: String },

    #[error("None of the {found} module files could be loaded")]
    NoFragmentsLoaded { found: usize },

    #[error("Failed to write collection to {path}: {source}")]
    PersistenceError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Fragment,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 可恢復的警告，整批處理繼續
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MergeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MergeError::MissingInputDirectory { .. }
            | MergeError::NoFragmentsFound { .. }
            | MergeError::NoFragmentsLoaded { .. } => ErrorCategory::Input,
            MergeError::FragmentParseError { .. } => ErrorCategory::Fragment,
            MergeError::PersistenceError { .. } | MergeError::SerializationError(_) => {
                ErrorCategory::Output
            }
            MergeError::ConfigError { .. }
            | MergeError::ConfigValidationError { .. }
            | MergeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MergeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MergeError::FragmentParseError { .. } => ErrorSeverity::Low,
            MergeError::ConfigError { .. } => ErrorSeverity::Medium,
            MergeError::MissingInputDirectory { .. }
            | MergeError::NoFragmentsFound { .. }
            | MergeError::NoFragmentsLoaded { .. }
            | MergeError::ConfigValidationError { .. }
            | MergeError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MergeError::PersistenceError { .. }
            | MergeError::IoError(_)
            | MergeError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MergeError::MissingInputDirectory { path } => {
                format!("Module directory '{}' does not exist", path)
            }
            MergeError::FragmentParseError { path, .. } => {
                format!("Module file '{}' could not be read and was skipped", path)
            }
            MergeError::NoFragmentsFound { path } => {
                format!("No module files were found in '{}'", path)
            }
            MergeError::NoFragmentsLoaded { found } => {
                format!("Found {} module files but none could be loaded", found)
            }
            MergeError::PersistenceError { path, .. } => {
                format!("Could not save the merged collection to '{}'", path)
            }
            MergeError::IoError(e) => format!("File system error: {}", e),
            MergeError::SerializationError(e) => {
                format!("Could not serialize the merged collection: {}", e)
            }
            MergeError::ConfigError { message } => format!("Configuration problem: {}", message),
            MergeError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MergeError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the module directory exists and contains files named like '01-auth.json'"
            }
            ErrorCategory::Fragment => {
                "Fix the JSON syntax and make sure the file has a module_info.name field"
            }
            ErrorCategory::Output => {
                "Check write permissions and free space for the output location"
            }
            ErrorCategory::Configuration => "Review the command line flags and template file",
            ErrorCategory::System => "Check file permissions and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_conditions_exit_non_zero() {
        let fatal = [
            MergeError::MissingInputDirectory {
                path: "postman-collections".to_string(),
            },
            MergeError::NoFragmentsFound {
                path: "postman-collections".to_string(),
            },
            MergeError::NoFragmentsLoaded { found: 2 },
            MergeError::PersistenceError {
                path: "out.json".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
        ];

        for error in &fatal {
            assert_ne!(error.severity().exit_code(), 0, "{} should be fatal", error);
        }
    }

    #[test]
    fn test_fragment_parse_error_is_recoverable() {
        let error = MergeError::FragmentParseError {
            path: "03-broken.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Fragment);
        assert_eq!(error.severity(), ErrorSeverity::Low);
        assert_eq!(error.severity().exit_code(), 0);
        assert!(error.to_string().contains("03-broken.json"));
        assert!(error.to_string().contains("expected value"));
    }
}
