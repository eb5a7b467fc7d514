use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid item type pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Content model metadata unavailable: {message}")]
    MetadataUnavailable { message: String },

    #[error("Template '{template}' failed to render: {message}")]
    Render { template: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Metadata,
    Template,
    System,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::InvalidPattern { .. } => ErrorCategory::Input,
            GenError::MetadataUnavailable { .. } | GenError::SerializationError(_) => {
                ErrorCategory::Metadata
            }
            GenError::Render { .. } => ErrorCategory::Template,
            GenError::IoError(_) => ErrorCategory::System,
            GenError::ConfigError { .. } | GenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 找不到 metadata 只會產生空結果
            GenError::MetadataUnavailable { .. } => ErrorSeverity::Low,
            GenError::Render { .. } => ErrorSeverity::Medium,
            GenError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::InvalidPattern { .. } => {
                "Use a model class name, optionally with '*' for one or more word characters, e.g. 'foo*'"
            }
            GenError::MetadataUnavailable { .. } => {
                "Check that the metadata file path is correct and the file exists"
            }
            GenError::Render { .. } => {
                "Check the template directory and that every template parameter is spelled correctly"
            }
            GenError::IoError(_) => "Check file permissions and available disk space",
            GenError::SerializationError(_) => {
                "Make sure the metadata file is valid JSON with an 'itemTypes' array"
            }
            GenError::ConfigError { .. } | GenError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::InvalidPattern { pattern, .. } => {
                format!("The item type pattern '{}' is not valid", pattern)
            }
            GenError::MetadataUnavailable { .. } => {
                "No content model metadata could be found".to_string()
            }
            GenError::Render { template, .. } => {
                format!("Could not render template '{}'", template)
            }
            GenError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn render(template: impl Into<String>, message: impl std::fmt::Display) -> Self {
        GenError::Render {
            template: template.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
