use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: String },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidFormat {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field}: {component} {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        component: String,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Invalid national_id: century digit '{value}' must be 2 or 3")]
    InvalidCentury { value: char },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn invalid_format(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the field a rejection belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Missing { field }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. } => Some(field.as_str()),
            Self::InvalidCentury { .. } => Some("national_id"),
            _ => None,
        }
    }

    /// Stable machine-readable code, safe to log without the offending value.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "required",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidCentury { .. } => "invalid_century",
            Self::Io(_) => "io_error",
            Self::Toml(_) => "toml_error",
            Self::Serialization(_) => "serialization_error",
            Self::Config { .. } => "config_error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Could not read input file: {}", e),
            Self::Toml(e) => format!("Input file is not valid TOML: {}", e),
            Self::Config { message } => format!("Invalid configuration: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
