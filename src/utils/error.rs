use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// 檔案操作種類，用於錯誤訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOperation::Read => write!(f, "read"),
            FileOperation::Write => write!(f, "write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Failed to {operation} '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error in '{}': {source}", .path.display())]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    FileAccess,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl RewriteError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RewriteError::FileAccess {
            path: path.into(),
            operation: FileOperation::Read,
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RewriteError::FileAccess {
            path: path.into(),
            operation: FileOperation::Write,
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RewriteError::FileAccess { .. } => ErrorCategory::FileAccess,
            RewriteError::ConfigError { .. }
            | RewriteError::ConfigParseError { .. }
            | RewriteError::InvalidConfigValueError { .. }
            | RewriteError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::FileAccess => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// 依嚴重程度決定的行程退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RewriteError::FileAccess {
                operation: FileOperation::Read,
                ..
            } => "Check that the target file exists, is readable and is valid UTF-8 text"
                .to_string(),
            RewriteError::FileAccess {
                operation: FileOperation::Write,
                ..
            } => "Check write permissions on the target file and its directory".to_string(),
            RewriteError::ConfigParseError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            RewriteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            RewriteError::MissingConfigError { field } => {
                format!("Provide '{}' via the config file or a command-line flag", field)
            }
            RewriteError::ConfigError { .. } => {
                "Review the configuration and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RewriteError::FileAccess {
                path,
                operation,
                source,
            } => format!("Cannot {} file {}: {}", operation, path.display(), source),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;
