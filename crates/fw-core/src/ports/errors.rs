use thiserror::Error;

/// Errors crossing the backend API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    #[error("rejected by server validation: {0}")]
    Validation(String),

    #[error("server error: {0}")]
    Server(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a toast/banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".into(),
            ApiError::NotFound => "We could not find your application.".into(),
            ApiError::Validation(detail) => format!("Please review your answers: {detail}"),
            ApiError::Server(_) | ApiError::Decode(_) => {
                "Something went wrong on our side. Please try again.".into()
            }
            ApiError::Network(_) | ApiError::Timeout => {
                "Could not reach the server. Check your connection and try again.".into()
            }
        }
    }
}
