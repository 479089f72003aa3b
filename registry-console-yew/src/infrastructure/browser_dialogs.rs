use async_trait::async_trait;
use futures::channel::oneshot;
use registry_console_core::{CredentialsPrompt, Dialogs};
use std::cell::RefCell;
use std::rc::Rc;

/// Notification waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error { title: String, message: String },
}

#[derive(Debug, Default)]
struct DialogState {
    notices: Vec<(u64, Notice)>,
    next_id: u64,
    login: Option<oneshot::Sender<CredentialsPrompt>>,
    revision: u64,
}

/// Dialogs rendered by the page itself
///
/// Notifications are queued for the notice area. The login prompt is a modal component:
/// `credentials()` parks a channel that the modal answers through [`BrowserDialogs::answer_login`].
/// Confirmations and prompts use the native browser dialogs.
#[derive(Debug, Clone, Default)]
pub struct BrowserDialogs {
    state: Rc<RefCell<DialogState>>,
}

impl BrowserDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(u64, Notice)> {
        self.state.borrow().notices.clone()
    }

    pub fn dismiss(&self, id: u64) {
        let mut state = self.state.borrow_mut();
        state.notices.retain(|(notice_id, _)| *notice_id != id);
        state.revision += 1;
    }

    pub fn login_pending(&self) -> bool {
        self.state.borrow().login.is_some()
    }

    /// Close the login modal with the operator's answer
    pub fn answer_login(&self, answer: CredentialsPrompt) {
        let sender = {
            let mut state = self.state.borrow_mut();
            state.revision += 1;
            state.login.take()
        };
        match sender {
            Some(sender) => {
                let _ = sender.send(answer);
            }
            None => tracing::debug!("Login answer without an open prompt"),
        }
    }

    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    fn push(&self, notice: Notice) {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.notices.push((id, notice));
        state.revision += 1;
    }
}

#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        self.push(Notice::Info(message.to_string()));
    }

    fn error(&self, title: &str, message: &str) {
        self.push(Notice::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    async fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        gloo::dialogs::prompt(message, Some(initial))
    }

    async fn credentials(&self) -> CredentialsPrompt {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            if let Some(previous) = state.login.replace(tx) {
                let _ = previous.send(CredentialsPrompt::Dismissed);
            }
            state.revision += 1;
        }
        // A dropped sender means the modal went away with the page
        rx.await.unwrap_or(CredentialsPrompt::Abandoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use registry_console_core::Credentials;

    #[test]
    fn test_notices_queue_until_dismissed() {
        let dialogs = BrowserDialogs::new();
        dialogs.alert("Package \"foo\" removed.");
        dialogs.error("Error when processing /api/v1/packages", "Database is locked");

        let notices = dialogs.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].1, Notice::Info("Package \"foo\" removed.".to_string()));

        dialogs.dismiss(notices[0].0);
        assert_eq!(dialogs.notices().len(), 1);
    }

    #[test]
    fn test_login_modal_answers_credentials() {
        let dialogs = BrowserDialogs::new();
        let answer = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let dialogs = dialogs.clone();
            let answer = answer.clone();
            pool.spawner()
                .spawn_local(async move {
                    *answer.borrow_mut() = Some(dialogs.credentials().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(dialogs.login_pending());

        let submitted = CredentialsPrompt::Submitted(Credentials::new("alice", "secret"));
        dialogs.answer_login(submitted.clone());
        pool.run_until_stalled();

        assert!(!dialogs.login_pending());
        assert_eq!(answer.borrow().clone(), Some(submitted));
    }
}
