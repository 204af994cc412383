//! Errors returned by the API client

use thiserror::Error;
use tuning_core::DashboardError;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, or a generic message
        message: String,
    },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A well-formed response that does not fit the contract
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The request body could not be built
    #[error("Invalid request: {0}")]
    Encode(#[from] DashboardError),
}

impl ClientError {
    /// Create an `Api` error from a status code and an optional body message
    pub fn api(status: u16, message: Option<String>) -> Self {
        ClientError::Api {
            status,
            message: message.unwrap_or_else(|| format!("Сервер вернул статус {status}")),
        }
    }

    /// Whether the failure happened before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Request(_))
    }

    /// Whether the server answered with an error status
    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    /// Message for the status bar
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(e) => {
                if e.is_timeout() {
                    "Сервер не ответил вовремя. Попробуйте ещё раз.".to_string()
                } else if e.is_connect() {
                    "Не удалось подключиться к серверу.".to_string()
                } else {
                    "Ошибка сети.".to_string()
                }
            }
            ClientError::Api { status, message } => format!("Ошибка сервера ({status}): {message}"),
            ClientError::Parse(_) | ClientError::UnexpectedResponse(_) => {
                "Сервер вернул неожиданный ответ.".to_string()
            }
            ClientError::Encode(e) => e.to_string(),
        }
    }
}

/// Result alias for API calls
pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api(500, Some("relation \"cars\" does not exist".into()));
        assert!(err.is_api());
        assert!(!err.is_transport());
        assert_eq!(
            err.user_message(),
            "Ошибка сервера (500): relation \"cars\" does not exist"
        );
    }

    #[test]
    fn test_api_error_without_body() {
        let err = ClientError::api(502, None);
        assert_eq!(err.to_string(), "API error (502): Сервер вернул статус 502");
    }

    #[test]
    fn test_parse_error_is_generic_for_users() {
        let err = ClientError::Parse("expected value at line 1".into());
        assert_eq!(err.user_message(), "Сервер вернул неожиданный ответ.");
    }
}
