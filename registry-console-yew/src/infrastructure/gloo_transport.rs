use crate::config::Config;
use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use registry_console_core::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use serde_json::Value;
use web_sys::RequestCredentials;

/// `fetch`-backed transport sending the session cookie with every call
#[derive(Debug, Clone)]
pub struct GlooTransport {
    config: Config,
}

impl GlooTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        // The backend refuses API calls without a JSON content type, bodiless ones included
        builder
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.url(&request.path);
        let builder = self.builder(request.method, &url);

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(ApiResponse::new(status, status_text, decode_body(&text)))
    }
}

/// Empty bodies become `Null`, non-JSON bodies are kept as a string
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
