use crate::application::{GatewayError, LoadingTracker};
use crate::traits::{ApiRequest, Dialogs, Method, Transport};
use instant::Instant;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;
use tracing::Instrument;
use uuid::Uuid;

/// One backend call: verb, route, optional payload and reporting flags
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    method: Method,
    endpoint: String,
    body: Option<Value>,
    report_errors: bool,
    background: bool,
}

impl Call {
    /// Foreground call whose failures are reported to the operator
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            report_errors: true,
            background: false,
        }
    }

    /// Build a call from a verb name; unknown verbs fail before anything is dispatched
    pub fn parse(method: &str, endpoint: impl Into<String>) -> Result<Self, GatewayError> {
        Ok(Self::new(method.parse()?, endpoint))
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, endpoint).with_body(body)
    }

    pub fn put(endpoint: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, endpoint).with_body(body)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Keep failures away from the operator; the caller still gets the error
    pub fn quiet(mut self) -> Self {
        self.report_errors = false;
        self
    }

    /// Keep the call out of the loading tracker
    pub fn background(mut self) -> Self {
        self.background = true;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn reports_errors(&self) -> bool {
        self.report_errors
    }

    pub fn is_background(&self) -> bool {
        self.background
    }
}

/// Single chokepoint for backend calls
///
/// Every call is dispatched as-is: no de-duplication, no retries. Foreground calls mark
/// their endpoint busy in the shared [`LoadingTracker`] and idle again before the caller
/// sees the outcome. Reported failures raise an error notification; every failure is
/// returned to the caller.
#[derive(Clone)]
pub struct Gateway {
    transport: Rc<dyn Transport>,
    dialogs: Rc<dyn Dialogs>,
    loading: LoadingTracker,
}

impl Gateway {
    pub fn new(
        transport: Rc<dyn Transport>,
        dialogs: Rc<dyn Dialogs>,
        loading: LoadingTracker,
    ) -> Self {
        Self {
            transport,
            dialogs,
            loading,
        }
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    pub fn dialogs(&self) -> &dyn Dialogs {
        self.dialogs.as_ref()
    }

    /// Dispatch a call and resolve with the response payload
    pub async fn call(&self, call: Call) -> Result<Value, GatewayError> {
        let span = tracing::debug_span!(
            "gateway_call",
            call_id = %Uuid::new_v4(),
            method = %call.method,
            endpoint = %call.endpoint,
        );
        self.dispatch(call).instrument(span).await
    }

    /// Dispatch a call and decode the payload
    pub async fn fetch<T: DeserializeOwned>(&self, call: Call) -> Result<T, GatewayError> {
        let endpoint = call.endpoint.clone();
        let report_errors = call.report_errors;
        let payload = self.call(call).await?;

        serde_json::from_value(payload).map_err(|e| {
            let error = GatewayError::Decode {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            };
            tracing::warn!(endpoint = %endpoint, error = %error, "Payload rejected");
            if report_errors {
                self.report(&endpoint, &error);
            }
            error
        })
    }

    /// Raise the error notification for a failed call
    pub fn report(&self, endpoint: &str, error: &GatewayError) {
        self.dialogs.error(
            &format!("Error when processing {endpoint}"),
            &error.user_message(),
        );
    }

    async fn dispatch(&self, call: Call) -> Result<Value, GatewayError> {
        let Call {
            method,
            endpoint,
            body,
            report_errors,
            background,
        } = call;

        if !background {
            self.loading.mark_busy(&endpoint);
        }

        tracing::debug!(background, has_body = body.is_some(), "Dispatching request");
        let started = Instant::now();

        let outcome = self
            .transport
            .send(ApiRequest {
                method,
                path: endpoint.clone(),
                body,
            })
            .await;

        if !background {
            self.loading.mark_idle(&endpoint);
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => Err(GatewayError::from_response(method, &endpoint, response)),
            Err(err) => Err(GatewayError::Network {
                method,
                endpoint: endpoint.clone(),
                reason: err.to_string(),
            }),
        };

        match &result {
            Ok(_) => tracing::debug!(elapsed_ms, "Request completed"),
            Err(err) => {
                tracing::warn!(elapsed_ms, error = %err, report_errors, "Request failed");
                if report_errors {
                    self.report(&endpoint, err);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, RecordingDialogs, Reply};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;

    const PACKAGES: &str = "/api/v1/packages";

    fn gateway() -> (Gateway, MockTransport, RecordingDialogs) {
        let transport = MockTransport::new();
        let dialogs = RecordingDialogs::new();
        let gateway = Gateway::new(
            Rc::new(transport.clone()),
            Rc::new(dialogs.clone()),
            LoadingTracker::new(),
        );
        (gateway, transport, dialogs)
    }

    #[test]
    fn test_success_resolves_with_payload_only() {
        let (gateway, transport, dialogs) = gateway();
        transport.reply_once(Method::Get, PACKAGES, Reply::ok(json!([{"name": "foo"}])));

        let payload = block_on(gateway.call(Call::get(PACKAGES))).unwrap();

        assert_eq!(payload, json!([{"name": "foo"}]));
        assert!(dialogs.errors().is_empty());
        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(true));
    }

    #[test]
    fn test_absent_body_sends_no_payload() {
        let (gateway, transport, _) = gateway();
        transport.reply_once(Method::Delete, "/api/v1/package/foo/", Reply::empty());

        block_on(gateway.call(Call::delete("/api/v1/package/foo/"))).unwrap();

        let request = transport
            .last_request(Method::Delete, "/api/v1/package/foo/")
            .unwrap();
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_reported_failure_notifies_once_and_rejects() {
        let (gateway, transport, dialogs) = gateway();
        transport.reply_once(
            Method::Get,
            PACKAGES,
            Reply::error(500, "Internal Server Error", "Database is locked"),
        );

        let err = block_on(gateway.call(Call::get(PACKAGES))).unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(
            dialogs.errors(),
            vec![(
                "Error when processing /api/v1/packages".to_string(),
                "Database is locked".to_string()
            )]
        );
        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(true));
    }

    #[test]
    fn test_quiet_failure_rejects_without_notification() {
        let (gateway, transport, dialogs) = gateway();
        transport.reply_once(
            Method::Get,
            "/api/v1/login",
            Reply::status(403, "Forbidden", json!({"error": "Not authorized"})),
        );

        let err = block_on(gateway.call(Call::get("/api/v1/login").quiet())).unwrap_err();

        assert!(err.is_unauthorized());
        assert!(dialogs.errors().is_empty());
    }

    #[test]
    fn test_network_failure() {
        let (gateway, transport, dialogs) = gateway();
        transport.reply_once(Method::Get, PACKAGES, Reply::network("connection refused"));

        let err = block_on(gateway.call(Call::get(PACKAGES))).unwrap_err();

        assert!(matches!(err, GatewayError::Network { .. }));
        assert_eq!(dialogs.errors()[0].1, "connection refused");
    }

    #[test]
    fn test_unsupported_method_fails_before_dispatch() {
        let (gateway, transport, _) = gateway();

        let err = Call::parse("patch", PACKAGES).unwrap_err();

        assert_eq!(err, GatewayError::UnsupportedMethod("patch".to_string()));
        assert!(transport.requests().is_empty());
        assert!(gateway.loading().is_empty());
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let (gateway, transport, dialogs) = gateway();
        transport.reply_once(Method::Get, PACKAGES, Reply::ok(json!({"not": "a list"})));

        let result: Result<Vec<crate::domain::PackageSummary>, _> =
            block_on(gateway.fetch(Call::get(PACKAGES)));

        assert!(matches!(result, Err(GatewayError::Decode { .. })));
        assert_eq!(dialogs.errors().len(), 1);
    }

    #[test]
    fn test_foreground_call_is_busy_until_completion() {
        let (gateway, transport, _) = gateway();
        transport.reply_always(Method::Get, PACKAGES, Reply::ok(json!([])));
        transport.hold(Method::Get, PACKAGES);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        {
            let gateway = gateway.clone();
            spawner
                .spawn_local(async move {
                    gateway.call(Call::get(PACKAGES)).await.unwrap();
                })
                .unwrap();
        }
        pool.run_until_stalled();

        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(false));
        assert!(gateway.loading().is_loading());
        assert!(!gateway.loading().settle());

        transport.release_all(Method::Get, PACKAGES);
        pool.run_until_stalled();

        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(true));
        assert!(gateway.loading().settle());
    }

    #[test]
    fn test_background_call_never_touches_tracker() {
        let (gateway, transport, _) = gateway();
        transport.reply_always(Method::Get, PACKAGES, Reply::ok(json!([])));
        transport.hold(Method::Get, PACKAGES);

        let mut pool = LocalPool::new();
        {
            let gateway = gateway.clone();
            pool.spawner()
                .spawn_local(async move {
                    gateway.call(Call::get(PACKAGES).background()).await.unwrap();
                })
                .unwrap();
        }
        pool.run_until_stalled();

        assert_eq!(transport.parked(Method::Get, PACKAGES), 1);
        assert!(gateway.loading().is_empty());
        assert!(!gateway.loading().is_loading());
        assert!(gateway.loading().settle());

        transport.release_all(Method::Get, PACKAGES);
        pool.run_until_stalled();
        assert!(gateway.loading().is_empty());
    }

    #[test]
    fn test_concurrent_calls_first_completion_clears_flag() {
        let (gateway, transport, _) = gateway();
        transport.reply_always(Method::Get, PACKAGES, Reply::ok(json!([])));
        transport.hold(Method::Get, PACKAGES);

        let mut pool = LocalPool::new();
        for _ in 0..2 {
            let gateway = gateway.clone();
            pool.spawner()
                .spawn_local(async move {
                    gateway.call(Call::get(PACKAGES)).await.unwrap();
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(transport.count(Method::Get, PACKAGES), 2);
        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(false));

        // One call still outstanding, yet the shared flag already reads idle
        transport.release_one(Method::Get, PACKAGES);
        pool.run_until_stalled();
        assert_eq!(transport.parked(Method::Get, PACKAGES), 1);
        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(true));

        transport.release_all(Method::Get, PACKAGES);
        pool.run_until_stalled();
        assert_eq!(gateway.loading().is_idle(PACKAGES), Some(true));
    }

    #[test]
    fn test_call_builder_defaults() {
        let call = Call::put("/api/v1/package/foo/", json!({"owner": 2}));
        assert_eq!(call.method(), Method::Put);
        assert!(call.reports_errors());
        assert!(!call.is_background());
        assert_eq!(call.body(), Some(&json!({"owner": 2})));

        let call = Call::get(PACKAGES).quiet().background();
        assert!(!call.reports_errors());
        assert!(call.is_background());
    }
}
