use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP body read failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("{value} is not a {expected}")]
    TypeMismatch { value: String, expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UtilError {
    pub fn type_mismatch(value: &serde_json::Value, expected: &str) -> Self {
        UtilError::TypeMismatch {
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    /// 錯誤是否來自呼叫端提供的設定
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            UtilError::ConfigError { .. }
                | UtilError::ConfigValidationError { .. }
                | UtilError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
