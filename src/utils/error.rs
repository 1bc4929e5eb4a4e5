use thiserror::Error;

#[derive(Error, Debug)]
pub enum LootboxError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Malformed response from {source_name}: {reason}")]
    MalformedResponse {
        source_name: &'static str,
        reason: String,
    },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Data,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LootboxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LootboxError::EmptyQuery => ErrorCategory::Input,
            LootboxError::HttpError(_) | LootboxError::UrlError(_) => ErrorCategory::Network,
            LootboxError::SerializationError(_) | LootboxError::MalformedResponse { .. } => {
                ErrorCategory::Data
            }
            LootboxError::IoError(_) => ErrorCategory::Storage,
            LootboxError::ConfigError { .. }
            | LootboxError::ConfigValidationError { .. }
            | LootboxError::InvalidConfigValueError { .. }
            | LootboxError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LootboxError::EmptyQuery => "Enter a game name and search again",
            LootboxError::HttpError(_) => {
                "Check that the lookup service is running and reachable, then search again"
            }
            LootboxError::UrlError(_) => "Check service.base_url and the endpoint paths",
            LootboxError::SerializationError(_) | LootboxError::MalformedResponse { .. } => {
                "The lookup service returned unexpected data; check its logs"
            }
            LootboxError::IoError(_) => "Check that the output directory is writable",
            LootboxError::ConfigError { .. }
            | LootboxError::ConfigValidationError { .. }
            | LootboxError::InvalidConfigValueError { .. }
            | LootboxError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LootboxError::EmptyQuery => "Enter a game name.".to_string(),
            LootboxError::HttpError(_) => "Could not reach the lookup service.".to_string(),
            LootboxError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            LootboxError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LootboxError>;
