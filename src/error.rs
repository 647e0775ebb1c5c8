//! Error types for the Serper client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// An error response returned by the Serper API itself.
///
/// Carries the literal HTTP status code and the upstream-supplied message
/// (or a fixed placeholder when the error body could not be decoded).
/// Distinct from transport failures, which surface as [`ClientError::Http`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("serper api error: {message} (status {status_code})")]
pub struct ApiError {
    /// HTTP status code of the rejected call.
    pub status_code: u16,
    /// Human-readable message from the service.
    pub message: String,
}

/// Errors that can occur during a client operation.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed (connect, DNS, timeout, cancellation).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request serialization or response decoding failed.
    #[error("Failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL could not be parsed.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The API rejected or failed the call.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// Returns the API error if this is an API-classified failure.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns whether the error originated from the API rather than transport.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            status_code: 401,
            message: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "serper api error: invalid api key (status 401)");
    }

    #[test]
    fn test_client_error_display_api() {
        let err = ClientError::Api(ApiError {
            status_code: 429,
            message: "rate limited".to_string(),
        });
        assert_eq!(err.to_string(), "serper api error: rate limited (status 429)");
    }

    #[test]
    fn test_client_error_from_api_error() {
        let err: ClientError = ApiError {
            status_code: 500,
            message: "unknown error".to_string(),
        }
        .into();
        assert!(err.is_api());
        assert_eq!(err.api().unwrap().status_code, 500);
    }

    #[test]
    fn test_client_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(!err.is_api());
        assert!(err.api().is_none());
    }

    #[test]
    fn test_client_error_from_url_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: ClientError = url_err.into();
        assert!(matches!(err, ClientError::UrlParse(_)));
    }

    #[test]
    fn test_client_error_debug() {
        let err = ClientError::Api(ApiError {
            status_code: 404,
            message: "not found".to_string(),
        });
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Api"));
    }
}
