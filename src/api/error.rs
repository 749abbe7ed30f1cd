//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single request against the task API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, CORS, DNS... anything before a response arrived
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived but its body was not what we expected
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("session expired or invalid, please log in again")]
    Unauthorized { message: Option<String> },
    /// Login answered OK but carried no token
    #[error("login response did not include a token")]
    MissingToken { message: Option<String> },
    /// No token in the session store to attach
    #[error("not logged in")]
    NotAuthenticated,
}

impl ApiError {
    /// Server-provided message, if the API sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. }
            | ApiError::Unauthorized { message }
            | ApiError::MissingToken { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message when present, else our own
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
