use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed design file at row {row}: {message}")]
    MalformedDesignError { row: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdapterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::CsvError(_) | Self::MalformedDesignError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error: 1 for I/O, 2 for configuration, 3 for bad data.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("File not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                _ => format!("Could not access {}: {}", path.display(), source),
            },
            Self::CsvError(e) => format!("Could not read CSV data: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::MalformedDesignError { row, message } => {
                format!("Design file row {} is malformed: {}", row, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Place MATLAB_OP.csv next to the executable or pass --dir/--input"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check the read/write permissions of the data directory"
                }
                _ => "Check that the disk is available and retry",
            },
            Self::CsvError(_) | Self::MalformedDesignError { .. } => {
                "Re-run the translation so the file starts with the header and minimize rows"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AdapterError::io(
            "/nowhere/MATLAB_OP.csv",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("MATLAB_OP.csv"));
        assert!(err.recovery_suggestion().contains("--dir"));
    }

    #[test]
    fn test_exit_codes_by_category() {
        let config = AdapterError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let data = AdapterError::MalformedDesignError {
            row: 3,
            message: "not a number".to_string(),
        };
        assert_eq!(data.exit_code(), 3);
    }
}
