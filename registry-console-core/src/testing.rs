//! In-memory transport and dialogs for tests.
//!
//! [`MockTransport`] answers from scripted replies keyed by method and path, records
//! every request, and can hold a route so tests decide when (and in which order)
//! outstanding calls complete. [`RecordingDialogs`] records notifications and answers
//! questions from queues.

use crate::domain::Credentials;
use crate::traits::{
    ApiRequest, ApiResponse, CredentialsPrompt, Dialogs, Method, Transport, TransportError,
};
use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

type Route = (Method, String);

/// Scripted answer of a route
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Response(ApiResponse),
    NetworkError(String),
}

impl Reply {
    /// `200 OK` with a JSON body
    pub fn ok(body: Value) -> Self {
        Reply::Response(ApiResponse::new(200, "OK", body))
    }

    /// `200 OK` with an empty body
    pub fn empty() -> Self {
        Reply::Response(ApiResponse::new(200, "OK", Value::Null))
    }

    /// Failure status with the backend's `{"error": {"message": ...}}` envelope
    pub fn error(status: u16, status_text: &str, message: &str) -> Self {
        Reply::Response(ApiResponse::new(
            status,
            status_text,
            json!({"error": {"message": message}}),
        ))
    }

    /// Failure status with an arbitrary body
    pub fn status(status: u16, status_text: &str, body: Value) -> Self {
        Reply::Response(ApiResponse::new(status, status_text, body))
    }

    pub fn network(reason: &str) -> Self {
        Reply::NetworkError(reason.to_string())
    }
}

#[derive(Debug, Default)]
struct MockState {
    scripted: HashMap<Route, VecDeque<Reply>>,
    standing: HashMap<Route, Reply>,
    held: HashSet<Route>,
    waiting: HashMap<Route, VecDeque<oneshot::Sender<()>>>,
    requests: Vec<ApiRequest>,
}

/// Transport double answering from scripted replies
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next request to the route; consumed in completion order
    pub fn reply_once(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.state
            .borrow_mut()
            .scripted
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    /// Answer every request to the route once scripted replies are used up
    pub fn reply_always(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.state
            .borrow_mut()
            .standing
            .insert((method, path.to_string()), reply);
        self
    }

    /// Park requests to the route until released
    pub fn hold(&self, method: Method, path: &str) {
        self.state
            .borrow_mut()
            .held
            .insert((method, path.to_string()));
    }

    /// Let the oldest parked request to the route complete
    pub fn release_one(&self, method: Method, path: &str) -> bool {
        let sender = self
            .state
            .borrow_mut()
            .waiting
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front);

        match sender {
            Some(sender) => sender.send(()).is_ok(),
            None => false,
        }
    }

    /// Stop holding the route and let every parked request complete
    pub fn release_all(&self, method: Method, path: &str) {
        let route = (method, path.to_string());
        let senders: Vec<_> = {
            let mut state = self.state.borrow_mut();
            state.held.remove(&route);
            state
                .waiting
                .remove(&route)
                .map(|queue| queue.into_iter().collect())
                .unwrap_or_default()
        };
        for sender in senders {
            let _ = sender.send(());
        }
    }

    /// Requests parked on the route
    pub fn parked(&self, method: Method, path: &str) -> usize {
        self.state
            .borrow()
            .waiting
            .get(&(method, path.to_string()))
            .map_or(0, VecDeque::len)
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// Number of requests received for the route
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Most recent request for the route
    pub fn last_request(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.state
            .borrow()
            .requests
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .cloned()
    }

    fn next_reply(&self, route: &Route) -> Option<Reply> {
        let mut state = self.state.borrow_mut();
        if let Some(reply) = state.scripted.get_mut(route).and_then(VecDeque::pop_front) {
            return Some(reply);
        }
        state.standing.get(route).cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let route = (request.method, request.path.clone());

        let gate = {
            let mut state = self.state.borrow_mut();
            state.requests.push(request);
            if state.held.contains(&route) {
                let (tx, rx) = oneshot::channel();
                state.waiting.entry(route.clone()).or_default().push_back(tx);
                Some(rx)
            } else {
                None
            }
        };

        if let Some(rx) = gate {
            let _ = rx.await;
        }

        match self.next_reply(&route) {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::NetworkError(reason)) => Err(TransportError::new(reason)),
            None => Ok(ApiResponse::new(
                404,
                "Not Found",
                json!({"error": {"message": format!("No route for {} {}", route.0, route.1)}}),
            )),
        }
    }
}

/// Everything the console showed or asked
#[derive(Debug, Default)]
struct DialogLog {
    alerts: Vec<String>,
    errors: Vec<(String, String)>,
    confirmations: Vec<String>,
    prompts: Vec<String>,
    credential_requests: usize,
    confirm_answers: VecDeque<bool>,
    prompt_answers: VecDeque<Option<String>>,
    credential_answers: VecDeque<CredentialsPrompt>,
}

/// Dialogs double: records notifications, answers from queues
///
/// Unanswered confirmations default to yes, prompts to cancel and the login prompt to
/// [`CredentialsPrompt::Abandoned`].
#[derive(Debug, Clone, Default)]
pub struct RecordingDialogs {
    log: Rc<RefCell<DialogLog>>,
}

impl RecordingDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_confirm(&self, answer: bool) -> &Self {
        self.log.borrow_mut().confirm_answers.push_back(answer);
        self
    }

    pub fn answer_prompt(&self, answer: Option<&str>) -> &Self {
        self.log
            .borrow_mut()
            .prompt_answers
            .push_back(answer.map(str::to_owned));
        self
    }

    pub fn answer_credentials(&self, answer: CredentialsPrompt) -> &Self {
        self.log.borrow_mut().credential_answers.push_back(answer);
        self
    }

    pub fn submit_login(&self, login: &str, password: &str) -> &Self {
        self.answer_credentials(CredentialsPrompt::Submitted(Credentials::new(
            login, password,
        )))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.log.borrow().alerts.clone()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.log.borrow().errors.clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.log.borrow().confirmations.clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.log.borrow().prompts.clone()
    }

    pub fn credential_requests(&self) -> usize {
        self.log.borrow().credential_requests
    }
}

#[async_trait(?Send)]
impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.log.borrow_mut().alerts.push(message.to_string());
    }

    fn error(&self, title: &str, message: &str) {
        self.log
            .borrow_mut()
            .errors
            .push((title.to_string(), message.to_string()));
    }

    async fn confirm(&self, message: &str) -> bool {
        let mut log = self.log.borrow_mut();
        log.confirmations.push(message.to_string());
        log.confirm_answers.pop_front().unwrap_or(true)
    }

    async fn prompt(&self, message: &str, _initial: &str) -> Option<String> {
        let mut log = self.log.borrow_mut();
        log.prompts.push(message.to_string());
        log.prompt_answers.pop_front().flatten()
    }

    async fn credentials(&self) -> CredentialsPrompt {
        let mut log = self.log.borrow_mut();
        log.credential_requests += 1;
        log.credential_answers
            .pop_front()
            .unwrap_or(CredentialsPrompt::Abandoned)
    }
}
