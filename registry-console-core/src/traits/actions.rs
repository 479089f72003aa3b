use crate::application::ConsoleError;
use crate::domain::{UserId, VersionDetail};
use async_trait::async_trait;

/// Result of an action guarded by a confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Confirmed and accepted by the backend
    Completed,
    /// Operator declined, nothing was sent
    Cancelled,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}

/// Actions available on a package row
#[async_trait(?Send)]
pub trait PackageActions {
    /// Package the actions are bound to
    fn package(&self) -> &str;

    /// Confirm, delete and reload the package list
    async fn remove(&self) -> Result<ActionOutcome, ConsoleError>;

    /// Reassign the package to a user; the list is not reloaded
    ///
    /// Logins are resolved to ids with [`UserAdmin::resolve_owner`](crate::UserAdmin::resolve_owner).
    async fn change_owner(&self, owner: UserId) -> Result<(), ConsoleError>;
}

/// Actions available on a version view-node
#[async_trait(?Send)]
pub trait VersionActions {
    fn package(&self) -> &str;

    fn version(&self) -> &str;

    /// Fetch the version detail and store it on the node; never cached
    async fn fetch_detail(&self) -> Result<VersionDetail, ConsoleError>;

    /// Confirm, delete and rebuild the parent's version list
    async fn remove(&self) -> Result<ActionOutcome, ConsoleError>;

    /// Confirm and hide; the node itself is left as it is
    async fn hide(&self) -> Result<ActionOutcome, ConsoleError>;
}
