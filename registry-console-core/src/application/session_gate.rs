use crate::application::{Call, ConsoleError, Gateway, GatewayError, Result};
use crate::domain::{endpoint, Credentials, SessionInfo};
use crate::traits::CredentialsPrompt;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// How one round of the login prompt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authorized(SessionInfo),
    /// Prompt closed without credentials
    Dismissed,
    /// Operator gave up
    Abandoned,
}

/// Session check in front of the gated loads
///
/// A rejected check opens the login prompt. Submitted credentials are posted until the
/// backend accepts them; a dismissed prompt re-runs the check. There is no attempt cap:
/// the loop is paced by the operator.
#[derive(Clone)]
pub struct SessionGate {
    gateway: Gateway,
    session: Rc<RefCell<Option<SessionInfo>>>,
}

impl SessionGate {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            session: Rc::new(RefCell::new(None)),
        }
    }

    /// Account of the last successful check or login
    pub fn session(&self) -> Option<SessionInfo> {
        self.session.borrow().clone()
    }

    pub fn is_admin(&self) -> bool {
        self.session.borrow().as_ref().is_some_and(|s| s.is_admin)
    }

    /// Ask the backend for the current session; failures are not reported to the operator
    pub async fn check(&self) -> std::result::Result<SessionInfo, GatewayError> {
        let info: SessionInfo = self.gateway.fetch(Call::get(endpoint::login()).quiet()).await?;
        self.remember(&info);
        Ok(info)
    }

    /// Post credentials; a refusal is reported like any other failure
    pub async fn authorize(&self, credentials: &Credentials) -> Result<SessionInfo> {
        let body = serde_json::to_value(credentials)?;
        let info: SessionInfo = self
            .gateway
            .fetch(Call::post(endpoint::login(), body))
            .await?;

        tracing::info!(login = %info.login, is_admin = info.is_admin, "Logged in");
        self.remember(&info);
        Ok(info)
    }

    /// Run the login prompt until credentials are accepted or the prompt is closed
    pub async fn login(&self) -> LoginOutcome {
        loop {
            match self.gateway.dialogs().credentials().await {
                CredentialsPrompt::Submitted(credentials) => {
                    match self.authorize(&credentials).await {
                        Ok(info) => return LoginOutcome::Authorized(info),
                        Err(err) => {
                            tracing::debug!(login = %credentials.login, error = %err, "Login refused")
                        }
                    }
                }
                CredentialsPrompt::Dismissed => return LoginOutcome::Dismissed,
                CredentialsPrompt::Abandoned => return LoginOutcome::Abandoned,
            }
        }
    }

    /// Make sure a session exists, logging in if needed
    pub async fn ensure(&self) -> Result<SessionInfo> {
        loop {
            let rejection = match self.check().await {
                Ok(info) => return Ok(info),
                Err(err) => err,
            };

            if rejection.is_unauthorized() {
                tracing::debug!(error = %rejection, "No session");
            } else {
                tracing::warn!(error = %rejection, "Session check failed");
            }
            self.session.borrow_mut().take();

            match self.login().await {
                LoginOutcome::Authorized(info) => return Ok(info),
                LoginOutcome::Dismissed => tracing::debug!("Login dismissed, checking again"),
                LoginOutcome::Abandoned => return Err(ConsoleError::LoginAbandoned),
            }
        }
    }

    /// Run `load` once a session exists
    ///
    /// `load` runs exactly once, whether the session already existed or was created by
    /// the login prompt.
    pub async fn run<F, Fut, T>(&self, load: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.ensure().await?;
        load().await
    }

    fn remember(&self, info: &SessionInfo) {
        *self.session.borrow_mut() = Some(info.clone());
    }
}
