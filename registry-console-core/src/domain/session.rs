use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logged-in account reported by the session endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionInfo {
    pub login: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Body of the authenticate request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::new("alice", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
