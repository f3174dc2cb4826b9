use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid color '{input}': {reason}")]
    InvalidColorError { input: String, reason: String },

    #[error("{kind} with id {id} not found")]
    NotFoundError { kind: String, id: u32 },

    #[error("Session error: {message}")]
    SessionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShapeError::IoError(_) => ErrorCategory::Io,
            ShapeError::SerializationError(_) => ErrorCategory::Data,
            ShapeError::ConfigError { .. }
            | ShapeError::ConfigValidationError { .. }
            | ShapeError::InvalidConfigValueError { .. }
            | ShapeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ShapeError::InvalidColorError { .. } | ShapeError::NotFoundError { .. } => {
                ErrorCategory::Input
            }
            ShapeError::SessionError { .. } => ErrorCategory::Session,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 未登入時的操作只是提醒
            ShapeError::SessionError { .. } => ErrorSeverity::Low,
            ShapeError::InvalidColorError { .. } | ShapeError::NotFoundError { .. } => {
                ErrorSeverity::Medium
            }
            ShapeError::ConfigError { .. }
            | ShapeError::ConfigValidationError { .. }
            | ShapeError::InvalidConfigValueError { .. }
            | ShapeError::MissingConfigError { .. }
            | ShapeError::SerializationError(_) => ErrorSeverity::High,
            ShapeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShapeError::IoError(_) => {
                "Check that the storage directory exists and is writable".to_string()
            }
            ShapeError::SerializationError(_) => {
                "The stored JSON looks corrupted; remove the file to reset the store".to_string()
            }
            ShapeError::ConfigError { .. } | ShapeError::ConfigValidationError { .. } => {
                "Review the settings file; every section is optional and can be removed".to_string()
            }
            ShapeError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            ShapeError::MissingConfigError { field } => {
                format!("Add '{}' to the settings file or pass it on the command line", field)
            }
            ShapeError::InvalidColorError { .. } => {
                "Use a six digit hex color such as #9333ea".to_string()
            }
            ShapeError::NotFoundError { kind, .. } => {
                format!("Run `shapesense catalog` to list the available {} ids", kind.to_lowercase())
            }
            ShapeError::SessionError { .. } => {
                "Run `shapesense login --nickname <name>` first".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("無法讀寫本地存儲: {}", self),
            ErrorCategory::Data => format!("本地數據格式錯誤: {}", self),
            ErrorCategory::Configuration => format!("配置錯誤: {}", self),
            ErrorCategory::Input => format!("輸入錯誤: {}", self),
            ErrorCategory::Session => format!("尚未登入: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
