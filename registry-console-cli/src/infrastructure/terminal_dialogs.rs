use async_trait::async_trait;
use registry_console_core::{Credentials, CredentialsPrompt, Dialogs};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

type Input = Box<dyn AsyncBufRead + Unpin>;

/// Dialogs on the terminal
///
/// Notifications go to stderr. Questions are answered from the input line by line; end
/// of input declines confirmations, cancels prompts and abandons the login.
#[derive(Clone)]
pub struct TerminalDialogs {
    input: Rc<RefCell<Option<Input>>>,
    assume_yes: bool,
    preset: Rc<RefCell<Option<Credentials>>>,
}

impl TerminalDialogs {
    pub fn stdin() -> Self {
        Self::with_input(Box::new(BufReader::new(tokio::io::stdin())))
    }

    pub fn with_input(input: Input) -> Self {
        Self {
            input: Rc::new(RefCell::new(Some(input))),
            assume_yes: false,
            preset: Rc::new(RefCell::new(None)),
        }
    }

    /// Answer every confirmation with yes
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Credentials submitted on the first login prompt
    pub fn with_credentials(self, credentials: Option<Credentials>) -> Self {
        *self.preset.borrow_mut() = credentials;
        self
    }

    async fn read_line(&self) -> Option<String> {
        let mut input = self.input.borrow_mut().take()?;
        let mut line = String::new();
        let read = input.read_line(&mut line).await;
        *self.input.borrow_mut() = Some(input);

        match read {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Reading input failed");
                None
            }
        }
    }

    async fn ask(&self, question: &str) -> Option<String> {
        eprint!("{question}");
        self.read_line().await
    }
}

#[async_trait(?Send)]
impl Dialogs for TerminalDialogs {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }

    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(question = message, "Confirmed by --yes");
            return true;
        }
        match self.ask(&format!("{message} [y/N] ")).await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        let question = if initial.is_empty() {
            format!("{message}: ")
        } else {
            format!("{message} [{initial}]: ")
        };
        let answer = self.ask(&question).await?;
        match answer.trim() {
            "" if initial.is_empty() => None,
            "" => Some(initial.to_string()),
            answer => Some(answer.to_string()),
        }
    }

    async fn credentials(&self) -> CredentialsPrompt {
        if let Some(credentials) = self.preset.borrow_mut().take() {
            tracing::debug!(login = %credentials.login, "Using configured credentials");
            return CredentialsPrompt::Submitted(credentials);
        }

        let Some(login) = self.ask("Login: ").await else {
            return CredentialsPrompt::Abandoned;
        };
        if login.trim().is_empty() {
            return CredentialsPrompt::Dismissed;
        }
        let Some(password) = self.ask("Password: ").await else {
            return CredentialsPrompt::Abandoned;
        };
        CredentialsPrompt::Submitted(Credentials::new(login.trim(), password))
    }
}
