use std::time::Duration;

use thiserror::Error;

/// Failure of a call to the summary service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Short text for the inline banner shown to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "The summary service could not be reached.".to_string(),
            ApiError::Timeout(_) => "The summary service did not answer in time.".to_string(),
            ApiError::Status { status, .. } if *status >= 500 => {
                format!("The summary service failed (HTTP {}).", status)
            }
            ApiError::Status { status, .. } => {
                format!("The summary service rejected the request (HTTP {}).", status)
            }
            ApiError::Decode(_) => "The summary service sent an unexpected response.".to_string(),
            ApiError::Encode(_) => "The request could not be prepared.".to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 400, message: "Missing user in request".to_string() };
        assert_eq!(err.to_string(), "HTTP 400: Missing user in request");
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(30)).to_string(),
            "Request timed out after 30s"
        );
    }

    #[test]
    fn test_user_message_distinguishes_failures() {
        assert!(ApiError::Network("refused".into()).user_message().contains("could not be reached"));
        assert!(
            ApiError::Status { status: 503, message: String::new() }
                .user_message()
                .contains("failed (HTTP 503)")
        );
        assert!(
            ApiError::Status { status: 404, message: String::new() }
                .user_message()
                .contains("rejected")
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
