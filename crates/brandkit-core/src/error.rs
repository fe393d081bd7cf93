use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandkitError {
    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("logo option not found: {0}")]
    OptionNotFound(String),

    #[error("invalid session id '{0}': expected a uuid")]
    InvalidSessionId(String),

    #[error("invalid session status: {0}")]
    InvalidStatus(String),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("unknown {kind} colour '{value}'; run `brandkit colors --list`")]
    UnknownColor { kind: &'static str, value: String },

    #[error("ai service name '{0}' exceeds 50 characters")]
    ServiceNameTooLong(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrandkitError>;
