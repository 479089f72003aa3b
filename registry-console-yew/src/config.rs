/// Browser shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin the API paths are appended to; empty means same origin
    pub api_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL must be absolute or start with '/': {0}")]
    InvalidApiUrl(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("REGISTRY_API_URL").unwrap_or("").to_string(),
        }
    }
}

impl Config {
    pub fn with_api_base(base: &str) -> Result<Self, ConfigError> {
        let base = base.trim();
        let valid = base.is_empty()
            || base.starts_with('/')
            || base.starts_with("http://")
            || base.starts_with("https://");
        if !valid {
            return Err(ConfigError::InvalidApiUrl(base.to_string()));
        }
        Ok(Self {
            api_base_url: base.trim_end_matches('/').to_string(),
        })
    }

    /// Compile-time default, overridden by the `api` query parameter
    pub fn from_location() -> Self {
        let Some(api) = api_from_url() else {
            return Self::default();
        };

        match Self::with_api_base(&api) {
            Ok(config) => {
                tracing::info!(api = %config.api_base_url, "Using API from URL");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring api parameter");
                Self::default()
            }
        }
    }

    /// Absolute URL of an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

fn api_from_url() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let parsed = web_sys::Url::new(&href).ok()?;
    parsed.search_params().get("api")
}
