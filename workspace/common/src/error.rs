use thiserror::Error;

/// Failure to reach or interpret a response from one of the backend endpoints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never completed (connection refused, DNS, CORS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Status {
        status: u16,
        /// `error` text from the response body, when the server provided one
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ClientError {
    /// True when the server never saw the request.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Message the server attached to a rejected request.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// A numeric form field carried a value that does not start with an integer.
///
/// The field is dropped from the request instead of failing the submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field {field} is not numeric: {value:?}")]
pub struct ValidationGap {
    pub field: String,
    pub value: String,
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
