use thiserror::Error;

#[derive(Error, Debug)]
pub enum LostFoundError {
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("invalid distance band '{0}', expected 10, 20 or 30 (minutes)")]
    InvalidRadius(String),

    #[error("invalid category '{0}'")]
    InvalidCategory(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("not signed in or session expired; run `lostfound auth login`")]
    Unauthorized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed response: missing field '{0}'")]
    MissingField(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl LostFoundError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LostFoundError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether a user-initiated "try again" can reasonably succeed.
    ///
    /// Transport failures, malformed payloads and server-side (5xx) errors are
    /// retryable. Authorization, validation and not-found errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LostFoundError::Http(_) | LostFoundError::Json(_) | LostFoundError::MissingField(_) => {
                true
            }
            LostFoundError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Field name for validation errors, used to place the message inline.
    pub fn field(&self) -> Option<&str> {
        match self {
            LostFoundError::Validation { field, .. } => Some(field),
            LostFoundError::InvalidRadius(_) => Some("distance"),
            LostFoundError::InvalidCategory(_) => Some("category"),
            LostFoundError::InvalidDate(_) => Some("found_after"),
            _ => None,
        }
    }
}

impl Clone for LostFoundError {
    fn clone(&self) -> Self {
        // reqwest, serde_json and io errors are not Clone; keep the message.
        match self {
            LostFoundError::ItemNotFound(s) => LostFoundError::ItemNotFound(s.clone()),
            LostFoundError::NotFound(s) => LostFoundError::NotFound(s.clone()),
            LostFoundError::Validation { field, message } => LostFoundError::Validation {
                field: field.clone(),
                message: message.clone(),
            },
            LostFoundError::InvalidRadius(s) => LostFoundError::InvalidRadius(s.clone()),
            LostFoundError::InvalidCategory(s) => LostFoundError::InvalidCategory(s.clone()),
            LostFoundError::InvalidDate(s) => LostFoundError::InvalidDate(s.clone()),
            LostFoundError::Unauthorized => LostFoundError::Unauthorized,
            LostFoundError::MissingField(s) => LostFoundError::MissingField(s.clone()),
            LostFoundError::Config(s) => LostFoundError::Config(s.clone()),
            LostFoundError::Api { status, message } => LostFoundError::Api {
                status: *status,
                message: message.clone(),
            },
            LostFoundError::Rejected(s) => LostFoundError::Rejected(s.clone()),
            LostFoundError::Other(s) => LostFoundError::Other(s.clone()),
            LostFoundError::Io(e) => {
                LostFoundError::Io(std::io::Error::new(e.kind(), e.to_string()))
            }
            LostFoundError::YamlParse(e) => LostFoundError::Other(format!("YAML parse error: {e}")),
            // Keep these retryable after cloning.
            LostFoundError::Json(e) => LostFoundError::MissingField(e.to_string()),
            LostFoundError::Http(e) => LostFoundError::Api {
                status: e.status().map(|s| s.as_u16()).unwrap_or(503),
                message: e.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LostFoundError>;
