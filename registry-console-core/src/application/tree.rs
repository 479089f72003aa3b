//! Package → version tree kept in sync with the backend
//!
//! The list of packages is loaded in one request. Versions are loaded lazily: a package
//! entering the expanded set triggers a detail fetch, and the versions of the answer are
//! turned into [`VersionNode`]s attached to the package. Version detail is fetched on
//! demand and never cached across requests.
//!
//! State is only mutated after an awaited call completes; no borrow of it is held across
//! an `.await`.

use crate::application::{Call, ConsoleError, Gateway, Result};
use crate::domain::{
    endpoint, HiddenUpdate, OwnerRef, OwnerUpdate, Package, PackageDetailPayload, PackageInfo,
    PackageSummary, UserId, VersionDetail,
};
use crate::traits::{ActionOutcome, PackageActions, VersionActions};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Default)]
struct TreeState {
    packages: Vec<Package>,
    expanded: BTreeSet<String>,
    revision: u64,
}

impl TreeState {
    fn package_mut(&mut self, name: &str) -> Option<&mut Package> {
        self.packages.iter_mut().find(|p| p.name() == name)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Owner of the package tree
///
/// Cloning yields another handle to the same tree.
#[derive(Clone)]
pub struct TreeSynchronizer {
    gateway: Gateway,
    state: Rc<RefCell<TreeState>>,
}

impl TreeSynchronizer {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: Rc::new(RefCell::new(TreeState::default())),
        }
    }

    /// Snapshot of the package list
    pub fn packages(&self) -> Vec<Package> {
        self.state.borrow().packages.clone()
    }

    pub fn package(&self, name: &str) -> Option<Package> {
        self.state
            .borrow()
            .packages
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.state.borrow().expanded.contains(name)
    }

    pub fn expanded(&self) -> Vec<String> {
        self.state.borrow().expanded.iter().cloned().collect()
    }

    /// Bumped on every change of the tree
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    pub fn package_actions(&self, name: &str) -> PackageHandle {
        PackageHandle {
            tree: self.clone(),
            package: name.to_string(),
        }
    }

    pub fn version_actions(&self, package: &str, version: &str) -> VersionHandle {
        VersionHandle {
            tree: self.clone(),
            package: package.to_string(),
            version: version.to_string(),
        }
    }

    /// Replace the whole list with the backend's; every package starts collapsed
    pub async fn load_packages(&self) -> Result<Vec<Package>> {
        let summaries: Vec<PackageSummary> =
            self.gateway.fetch(Call::get(endpoint::packages())).await?;

        let mut state = self.state.borrow_mut();
        state.packages = summaries.into_iter().map(Package::from).collect();
        state.expanded.clear();
        state.bump();

        tracing::debug!(count = state.packages.len(), "Package list loaded");
        Ok(state.packages.clone())
    }

    /// Mark the package expanded, fetching its detail on the collapsed → expanded edge
    ///
    /// Returns whether a fetch was made. A failed fetch leaves the package collapsed, and a
    /// name missing from the list is ignored without a request.
    pub async fn expand(&self, name: &str) -> Result<bool> {
        {
            let mut state = self.state.borrow_mut();
            if state.package_mut(name).is_none() {
                tracing::debug!(package = name, "Ignoring expand of unlisted package");
                return Ok(false);
            }
            if !state.expanded.insert(name.to_string()) {
                return Ok(false);
            }
            state.bump();
        }

        if let Err(err) = self.refresh(name).await {
            let mut state = self.state.borrow_mut();
            state.expanded.remove(name);
            state.bump();
            return Err(err);
        }
        Ok(true)
    }

    /// Mark the package collapsed; fetched versions stay attached
    pub fn collapse(&self, name: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let removed = state.expanded.remove(name);
        if removed {
            state.bump();
        }
        removed
    }

    /// Fetch the package detail and rebuild its versions from scratch
    pub async fn refresh(&self, name: &str) -> Result<()> {
        let payload: PackageDetailPayload =
            self.gateway.fetch(Call::get(endpoint::package(name))).await?;

        let mut state = self.state.borrow_mut();
        match state.package_mut(name) {
            Some(package) => {
                let info = PackageInfo::from_payload(payload);
                tracing::debug!(package = name, versions = info.versions().len(), "Versions attached");
                package.attach_info(info);
                state.bump();
            }
            None => tracing::debug!(package = name, "Discarding detail of unlisted package"),
        }
        Ok(())
    }

    async fn fetch_version_detail(&self, package: &str, version: &str) -> Result<VersionDetail> {
        let detail: VersionDetail = self
            .gateway
            .fetch(Call::get(endpoint::version(package, version)))
            .await?;

        let mut state = self.state.borrow_mut();
        let node = state
            .package_mut(package)
            .and_then(Package::info_mut)
            .and_then(|info| info.version_mut(version));
        match node {
            Some(node) => {
                node.set_detail(detail.clone());
                state.bump();
            }
            None => tracing::debug!(package, version, "Discarding detail of unlisted version"),
        }
        Ok(detail)
    }

    async fn remove_version(&self, package: &str, version: &str) -> Result<ActionOutcome> {
        let question = format!("Remove version \"{version}\" of package \"{package}\"?");
        if !self.gateway.dialogs().confirm(&question).await {
            return Ok(ActionOutcome::Cancelled);
        }

        self.gateway
            .call(Call::delete(endpoint::version(package, version)))
            .await?;
        tracing::info!(package, version, "Version removed");
        self.gateway
            .dialogs()
            .alert(&format!("Version \"{version}\" of package \"{package}\" removed."));

        self.refresh(package).await?;
        Ok(ActionOutcome::Completed)
    }

    async fn hide_version(&self, package: &str, version: &str) -> Result<ActionOutcome> {
        let question = format!("Hide version \"{version}\" of package \"{package}\"?");
        if !self.gateway.dialogs().confirm(&question).await {
            return Ok(ActionOutcome::Cancelled);
        }

        let body = serde_json::to_value(HiddenUpdate { hidden: true })?;
        self.gateway
            .call(Call::put(endpoint::version(package, version), body))
            .await?;
        tracing::info!(package, version, "Version hidden");
        self.gateway
            .dialogs()
            .alert(&format!("Version \"{version}\" of package \"{package}\" hidden."));

        Ok(ActionOutcome::Completed)
    }

    async fn remove_package(&self, package: &str) -> Result<ActionOutcome> {
        let question = format!("Remove package \"{package}\" with all its versions?");
        if !self.gateway.dialogs().confirm(&question).await {
            return Ok(ActionOutcome::Cancelled);
        }

        self.gateway
            .call(Call::delete(endpoint::package(package)))
            .await?;
        tracing::info!(package, "Package removed");

        {
            let mut state = self.state.borrow_mut();
            state.packages.retain(|p| p.name() != package);
            state.expanded.remove(package);
            state.bump();
        }
        self.gateway
            .dialogs()
            .alert(&format!("Package \"{package}\" removed."));

        self.load_packages().await?;
        Ok(ActionOutcome::Completed)
    }

    async fn change_owner(&self, package: &str, owner: UserId) -> Result<()> {
        let body = serde_json::to_value(OwnerUpdate { owner })?;
        self.gateway
            .call(Call::put(endpoint::package(package), body))
            .await?;
        tracing::info!(package, owner, "Package owner changed");

        let mut state = self.state.borrow_mut();
        if let Some(entry) = state.package_mut(package) {
            entry.set_owner(OwnerRef::Id(owner));
            state.bump();
        }
        Ok(())
    }
}

/// Actions bound to one package of a [`TreeSynchronizer`]
#[derive(Clone)]
pub struct PackageHandle {
    tree: TreeSynchronizer,
    package: String,
}

#[async_trait(?Send)]
impl PackageActions for PackageHandle {
    fn package(&self) -> &str {
        &self.package
    }

    async fn remove(&self) -> std::result::Result<ActionOutcome, ConsoleError> {
        self.tree.remove_package(&self.package).await
    }

    async fn change_owner(&self, owner: UserId) -> std::result::Result<(), ConsoleError> {
        self.tree.change_owner(&self.package, owner).await
    }
}

/// Actions bound to one version of a [`TreeSynchronizer`]
#[derive(Clone)]
pub struct VersionHandle {
    tree: TreeSynchronizer,
    package: String,
    version: String,
}

#[async_trait(?Send)]
impl VersionActions for VersionHandle {
    fn package(&self) -> &str {
        &self.package
    }

    fn version(&self) -> &str {
        &self.version
    }

    async fn fetch_detail(&self) -> std::result::Result<VersionDetail, ConsoleError> {
        self.tree
            .fetch_version_detail(&self.package, &self.version)
            .await
    }

    async fn remove(&self) -> std::result::Result<ActionOutcome, ConsoleError> {
        self.tree.remove_version(&self.package, &self.version).await
    }

    async fn hide(&self) -> std::result::Result<ActionOutcome, ConsoleError> {
        self.tree.hide_version(&self.package, &self.version).await
    }
}
