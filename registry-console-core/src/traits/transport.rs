use crate::application::GatewayError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP verbs the backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "put" => Ok(Method::Put),
            "delete" => Ok(Method::Delete),
            _ => Err(GatewayError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Resource path, relative to the backend origin
    pub path: String,
    /// `None` sends no payload at all
    pub body: Option<Value>,
}

/// Response envelope produced by the transport, whatever the status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    /// Decoded JSON body, `Null` when the body was empty
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: Value) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (connection refused, DNS, CORS, ...)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Request/response channel to the backend (allows mocking in tests)
///
/// Implementations report every HTTP status as `Ok`; classifying non-2xx answers is the
/// gateway's job.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
