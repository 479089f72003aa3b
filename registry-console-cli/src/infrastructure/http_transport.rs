use crate::infrastructure::{CliError, Result};
use async_trait::async_trait;
use registry_console_core::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// reqwest transport keeping the session cookie between calls
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(server: &str) -> Result<Self> {
        let base = Url::parse(server).map_err(|e| CliError::invalid_url(server, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CliError::invalid_url(server, "scheme must be http or https"));
        }

        let inner = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| CliError::HttpClient(e.to_string()))?;

        Ok(Self { inner, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of an API path, keeping any path prefix of the server URL
    pub fn url(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let url = self
            .url(&request.path)
            .map_err(|e| TransportError::new(e.to_string()))?;

        // The backend refuses API calls without a JSON content type, bodiless ones included
        let mut req = self
            .inner
            .request(Self::method(request.method), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(ApiResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            decode_body(&text),
        ))
    }
}

/// Empty bodies become `Null`, non-JSON bodies are kept as a string
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_keeps_server_prefix() {
        let transport = HttpTransport::new("https://pypi.example.com/registry/").unwrap();
        assert_eq!(
            transport.url("/api/v1/packages").unwrap().as_str(),
            "https://pypi.example.com/registry/api/v1/packages"
        );
    }

    #[test]
    fn test_rejects_non_http_server() {
        let err = HttpTransport::new("ftp://pypi.example.com").unwrap_err();
        assert!(matches!(err, CliError::InvalidServerUrl { .. }));
        assert!(HttpTransport::new("not a url").is_err());
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body("  "), Value::Null);
        assert_eq!(decode_body("[1, 2]"), json!([1, 2]));
        assert_eq!(decode_body("Bad Gateway"), json!("Bad Gateway"));
    }
}
