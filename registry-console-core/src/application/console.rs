use crate::application::{Gateway, LoadingTracker, SessionGate, TreeSynchronizer, UserAdmin};
use crate::traits::{Dialogs, Transport};
use std::rc::Rc;

/// Everything a presentation shell needs, wired around one gateway
#[derive(Clone)]
pub struct Console {
    gateway: Gateway,
    tree: TreeSynchronizer,
    users: UserAdmin,
    session: SessionGate,
}

impl Console {
    pub fn new(transport: Rc<dyn Transport>, dialogs: Rc<dyn Dialogs>) -> Self {
        Self::with_loading(transport, dialogs, LoadingTracker::new())
    }

    /// Wire the console around a tracker owned by the caller
    pub fn with_loading(
        transport: Rc<dyn Transport>,
        dialogs: Rc<dyn Dialogs>,
        loading: LoadingTracker,
    ) -> Self {
        let gateway = Gateway::new(transport, dialogs, loading);
        Self {
            tree: TreeSynchronizer::new(gateway.clone()),
            users: UserAdmin::new(gateway.clone()),
            session: SessionGate::new(gateway.clone()),
            gateway,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn loading(&self) -> &LoadingTracker {
        self.gateway.loading()
    }

    pub fn tree(&self) -> &TreeSynchronizer {
        &self.tree
    }

    pub fn users(&self) -> &UserAdmin {
        &self.users
    }

    pub fn session(&self) -> &SessionGate {
        &self.session
    }
}
