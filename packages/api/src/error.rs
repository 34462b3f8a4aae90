//! Error type for every call made against the REST service.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The service answered with a non-success status, either as the HTTP
    /// status or as the `statusCode` of the envelope.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape the call expects.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The envelope carried no `data` where a record was expected.
    #[error("response contained no data")]
    MissingData,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
