use crate::domain::ValidationErrors;
use crate::traits::{ApiResponse, Method};
use serde_json::Value;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// Programming error: the verb does not exist in the backend contract
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The backend answered with a non-2xx status
    #[error("{method} {endpoint} failed with status {status}: {message}")]
    Status {
        method: Method,
        endpoint: String,
        status: u16,
        status_text: String,
        /// Human-readable message extracted from the failure
        message: String,
        body: Value,
    },

    /// The request never produced a response
    #[error("{method} {endpoint} failed: {reason}")]
    Network {
        method: Method,
        endpoint: String,
        reason: String,
    },

    /// The payload does not have the expected shape
    #[error("Unexpected payload from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl GatewayError {
    /// Build the error for a non-2xx response
    pub fn from_response(method: Method, endpoint: &str, response: ApiResponse) -> Self {
        let message = extract_message(&response.body)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if response.status_text.is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    response.status_text.clone()
                }
            });

        GatewayError::Status {
            method,
            endpoint: endpoint.to_string(),
            status: response.status,
            status_text: response.status_text,
            message,
            body: response.body,
        }
    }

    /// Message shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Status { message, .. } => message.clone(),
            GatewayError::Network { reason, .. } => reason.clone(),
            GatewayError::Decode { reason, .. } => reason.clone(),
            GatewayError::UnsupportedMethod(_) => self.to_string(),
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            GatewayError::Status { endpoint, .. }
            | GatewayError::Network { endpoint, .. }
            | GatewayError::Decode { endpoint, .. } => Some(endpoint),
            GatewayError::UnsupportedMethod(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend refused the session (missing, expired or disabled)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Structured `error.message` first, then a bare `error` string
fn extract_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Object(error) => error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        Value::String(reason) => Some(reason.clone()),
        _ => None,
    }
}

/// Errors of console operations
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Login abandoned")]
    LoginAbandoned,

    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

impl ConsoleError {
    pub fn gateway(&self) -> Option<&GatewayError> {
        match self {
            ConsoleError::Gateway(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failure(body: Value, status_text: &str) -> GatewayError {
        GatewayError::from_response(
            Method::Get,
            "/api/v1/packages",
            ApiResponse::new(500, status_text, body),
        )
    }

    #[test]
    fn test_structured_message_wins() {
        let err = failure(
            json!({"error": {"message": "Database is locked"}}),
            "Internal Server Error",
        );
        assert_eq!(err.user_message(), "Database is locked");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_bare_error_string() {
        let err = failure(json!({"error": "Not authorized"}), "Forbidden");
        assert_eq!(err.user_message(), "Not authorized");
    }

    #[test]
    fn test_falls_back_to_status_text() {
        let err = failure(Value::String("<html>oops</html>".into()), "Bad Gateway");
        assert_eq!(err.user_message(), "Bad Gateway");
    }

    #[test]
    fn test_falls_back_to_status_code() {
        let err = failure(Value::Null, "");
        assert_eq!(err.user_message(), "HTTP 500");
    }

    #[test]
    fn test_unauthorized() {
        let err = GatewayError::from_response(
            Method::Get,
            "/api/v1/login",
            ApiResponse::new(403, "Forbidden", json!({"error": "Session expired"})),
        );
        assert!(err.is_unauthorized());
        assert_eq!(err.endpoint(), Some("/api/v1/login"));
    }

    #[test]
    fn test_display_carries_context() {
        let err = GatewayError::Network {
            method: Method::Delete,
            endpoint: "/api/v1/package/foo/".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "DELETE /api/v1/package/foo/ failed: connection refused"
        );
    }
}
