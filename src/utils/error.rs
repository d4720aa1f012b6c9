use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Resource '{resource}' unavailable: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid price '{value}' on line {line}: {source}")]
    NumericParseFailure {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Resource '{resource}' is not valid UTF-8")]
    InvalidEncoding {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::ResourceUnavailable { .. } => ErrorCategory::Storage,
            ShopError::NumericParseFailure { .. } | ShopError::InvalidEncoding { .. } => {
                ErrorCategory::Data
            }
            ShopError::TomlError(_)
            | ShopError::ConfigError { .. }
            | ShopError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ShopError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopError::ResourceUnavailable { resource, .. } => format!(
                "Check that '{}' exists and that the data directory is readable and writable",
                resource
            ),
            ShopError::NumericParseFailure { line, .. } => format!(
                "Fix or remove line {} of the products file; the price must be a decimal number",
                line
            ),
            ShopError::InvalidEncoding { resource, .. } => {
                format!("Re-save '{}' as UTF-8 text", resource)
            }
            ShopError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            ShopError::ConfigError { .. } => {
                "Review the [store] section of the config file".to_string()
            }
            ShopError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            ShopError::ValidationError { .. } => {
                "Correct the input and run the command again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::ResourceUnavailable { resource, .. } => {
                format!("Unable to open {}", resource)
            }
            ShopError::NumericParseFailure { line, value, .. } => {
                format!("Products file is corrupt: '{}' on line {} is not a price", value, line)
            }
            ShopError::InvalidEncoding { resource, .. } => {
                format!("{} contains bytes that are not UTF-8 text", resource)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
