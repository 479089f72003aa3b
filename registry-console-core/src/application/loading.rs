use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Per-endpoint in-flight map shared between the gateway and the presentation layer
///
/// Each tracked endpoint maps to an *idle* flag: `false` while a foreground call to it is
/// outstanding, `true` otherwise. Concurrent calls to one endpoint share a single flag and
/// the last call to finish decides its value.
///
/// Cloning yields another handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    endpoints: Rc<RefCell<BTreeMap<String, bool>>>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A foreground call to `endpoint` was dispatched
    pub fn mark_busy(&self, endpoint: &str) {
        self.endpoints.borrow_mut().insert(endpoint.to_string(), false);
    }

    /// A foreground call to `endpoint` finished
    pub fn mark_idle(&self, endpoint: &str) {
        self.endpoints.borrow_mut().insert(endpoint.to_string(), true);
    }

    /// Idle flag of an endpoint, `None` when untracked
    pub fn is_idle(&self, endpoint: &str) -> Option<bool> {
        self.endpoints.borrow().get(endpoint).copied()
    }

    /// Whether any tracked endpoint is busy; never changes the map
    pub fn is_loading(&self) -> bool {
        self.endpoints.borrow().values().any(|idle| !idle)
    }

    /// Endpoints currently busy
    pub fn busy_endpoints(&self) -> Vec<String> {
        self.endpoints
            .borrow()
            .iter()
            .filter(|(_, idle)| !**idle)
            .map(|(endpoint, _)| endpoint.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.endpoints.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.borrow().is_empty()
    }

    /// One-shot "all settled" signal
    ///
    /// Returns `true` when no tracked endpoint is busy and then forgets every tracked
    /// endpoint. Returns `false` and leaves the map untouched while anything is pending.
    /// An empty map counts as settled.
    pub fn settle(&self) -> bool {
        let mut endpoints = self.endpoints.borrow_mut();
        let settled = endpoints.values().all(|idle| *idle);
        if settled {
            endpoints.clear();
        }
        settled
    }
}

impl PartialEq for LoadingTracker {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.endpoints, &other.endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_idle_settles_and_clears() {
        let tracker = LoadingTracker::new();
        tracker.mark_idle("a");
        tracker.mark_idle("b");

        assert!(tracker.settle());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_pending_endpoint_blocks_settle() {
        let tracker = LoadingTracker::new();
        tracker.mark_idle("a");
        tracker.mark_busy("b");

        assert!(!tracker.settle());
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.is_idle("a"), Some(true));
        assert_eq!(tracker.is_idle("b"), Some(false));
    }

    #[test]
    fn test_empty_tracker_is_settled() {
        let tracker = LoadingTracker::new();
        assert!(tracker.settle());
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_keys_persist_after_completion() {
        let tracker = LoadingTracker::new();
        tracker.mark_busy("/api/v1/packages");
        assert!(tracker.is_loading());
        assert_eq!(tracker.busy_endpoints(), vec!["/api/v1/packages".to_string()]);

        tracker.mark_idle("/api/v1/packages");
        assert!(!tracker.is_loading());
        assert_eq!(tracker.is_idle("/api/v1/packages"), Some(true));
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = LoadingTracker::new();
        let view = tracker.clone();
        tracker.mark_busy("x");

        assert!(view.is_loading());
        assert_eq!(tracker, view);
        assert_ne!(tracker, LoadingTracker::new());
    }
}
