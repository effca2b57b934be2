//! Error types for the lager facade

pub type Result<T> = std::result::Result<T, LagerError>;

#[derive(Debug, thiserror::Error)]
pub enum LagerError {
    /// Unrecognized drinker selector
    #[error("No Drinker: '{0}'")]
    NoDrinker(String),

    /// IO error from the destination of a drinker
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A record value the drinker cannot represent
    #[error("Formatter error ({format_type}): {message}")]
    Formatter {
        format_type: String,
        message: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LagerError {
    /// Create a "no such drinker" error for an unrecognized selector
    pub fn no_drinker(selector: impl Into<String>) -> Self {
        LagerError::NoDrinker(selector.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LagerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LagerError::Formatter {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LagerError::Other(msg.into())
    }
}
