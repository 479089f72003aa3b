use crate::domain::Credentials;
use async_trait::async_trait;

/// Answer of the login prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsPrompt {
    /// Operator entered credentials
    Submitted(Credentials),
    /// Prompt closed without credentials; the session gate asks again
    Dismissed,
    /// Operator gave up (closed the page, end of input)
    Abandoned,
}

/// Modal dialog contract consumed by the console
///
/// `alert` and `error` are notifications: they return immediately and never block the
/// caller. The remaining methods resolve once the operator answers.
#[async_trait(?Send)]
pub trait Dialogs {
    /// Informational notification
    fn alert(&self, message: &str);

    /// Error notification
    fn error(&self, title: &str, message: &str);

    /// Yes/no question
    async fn confirm(&self, message: &str) -> bool;

    /// Free text input, `None` when cancelled
    async fn prompt(&self, message: &str, initial: &str) -> Option<String>;

    /// Login form
    async fn credentials(&self) -> CredentialsPrompt;
}
