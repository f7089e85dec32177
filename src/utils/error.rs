use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::IoError(_) => ErrorCategory::Io,
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                ErrorCategory::Output
            }
            DirectoryError::ConfigError { .. } | DirectoryError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::IoError(_) => "Check that the catalog file exists and is readable",
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                "Try a different output format, e.g. --format table"
            }
            DirectoryError::ConfigError { .. } => {
                "Make sure the catalog file is valid TOML with [directory] and [[practitioners]] sections"
            }
            DirectoryError::InvalidConfigValueError { .. } => {
                "Fix the value mentioned above in the catalog file or command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::IoError(e) => format!("Could not read the catalog: {}", e),
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
