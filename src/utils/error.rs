use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeisError {
    #[error("required parameter missing: {name}")]
    MissingParameter { name: String },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("NEIS_API_KEY is not configured")]
    MissingApiKey,

    #[error("{context} timed out")]
    Timeout { context: &'static str },

    #[error("network error during {context}: {source}")]
    Network {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context} returned HTTP status {status}")]
    HttpStatus { context: &'static str, status: u16 },

    #[error("malformed JSON in {context} response: {source}")]
    JsonParse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {context} response shape: {detail}")]
    EnvelopeShape {
        context: &'static str,
        detail: String,
    },

    #[error("NEIS API error {code}: {message}")]
    RemoteApi { code: String, message: String },
}

impl NeisError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        NeisError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// HTTP status the front-end reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            NeisError::MissingParameter { .. } | NeisError::Validation { .. } => 400,
            NeisError::Timeout { .. } => 504,
            NeisError::MissingApiKey
            | NeisError::Network { .. }
            | NeisError::HttpStatus { .. }
            | NeisError::JsonParse { .. }
            | NeisError::EnvelopeShape { .. }
            | NeisError::RemoteApi { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, NeisError>;
