use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown Debian release '{name}'")]
    UnknownRelease { name: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Package tool error: {message}")]
    ToolError { message: String },

    #[error("Unexpected package tool output: {message}")]
    MalformedOutput { message: String },
}

impl DepsError {
    /// 錯誤對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            DepsError::ConfigError { .. } | DepsError::UnknownRelease { .. } => 2,
            DepsError::InvalidInput { .. } => 2,
            DepsError::ToolError { .. } | DepsError::MalformedOutput { .. } => 3,
            DepsError::IoError(_) | DepsError::SerializationError(_) => 1,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DepsError::InvalidInput { .. } | DepsError::UnknownRelease { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, DepsError>;
