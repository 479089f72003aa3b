use crate::domain::{UserId, VersionNode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Package owner as reported by the backend
///
/// The registry reports the owning user's numeric id; operators usually type a login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OwnerRef {
    Id(u64),
    Login(String),
}

impl OwnerRef {
    /// Interpret operator input: digits are a user id, anything else a login
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        input
            .parse::<u64>()
            .map(OwnerRef::Id)
            .unwrap_or_else(|_| OwnerRef::Login(input.to_string()))
    }
}

impl fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerRef::Id(id) => write!(f, "#{id}"),
            OwnerRef::Login(login) => write!(f, "{login}"),
        }
    }
}

impl From<&str> for OwnerRef {
    fn from(value: &str) -> Self {
        OwnerRef::Login(value.to_string())
    }
}

impl From<u64> for OwnerRef {
    fn from(value: u64) -> Self {
        OwnerRef::Id(value)
    }
}

/// Entry of the package list payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageSummary {
    pub name: String,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
}

/// Raw package detail payload, versions still as plain names
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PackageDetailPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    /// Package mirrored from an upstream index rather than uploaded locally
    #[serde(default)]
    pub proxy: bool,
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Body of the owner change request; the backend only takes a user id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OwnerUpdate {
    pub owner: UserId,
}

/// Detail attached to an expanded package
///
/// Built from a [`PackageDetailPayload`] by turning every version name into a
/// [`VersionNode`]. The conversion is one-way: a fresh payload replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    owner: Option<OwnerRef>,
    proxy: bool,
    versions: Vec<VersionNode>,
}

impl PackageInfo {
    pub fn from_payload(payload: PackageDetailPayload) -> Self {
        Self {
            owner: payload.owner,
            proxy: payload.proxy,
            versions: payload.versions.into_iter().map(VersionNode::new).collect(),
        }
    }

    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    pub fn is_proxy(&self) -> bool {
        self.proxy
    }

    pub fn versions(&self) -> &[VersionNode] {
        &self.versions
    }

    pub fn version(&self, name: &str) -> Option<&VersionNode> {
        self.versions.iter().find(|v| v.name() == name)
    }

    pub(crate) fn version_mut(&mut self, name: &str) -> Option<&mut VersionNode> {
        self.versions.iter_mut().find(|v| v.name() == name)
    }
}

/// Package node of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    name: String,
    owner: Option<OwnerRef>,
    /// Absent until the package is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    info: Option<PackageInfo>,
}

impl Package {
    pub fn new(name: impl Into<String>, owner: Option<OwnerRef>) -> Self {
        Self {
            name: name.into(),
            owner,
            info: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    pub fn info(&self) -> Option<&PackageInfo> {
        self.info.as_ref()
    }

    pub(crate) fn info_mut(&mut self) -> Option<&mut PackageInfo> {
        self.info.as_mut()
    }

    pub(crate) fn attach_info(&mut self, info: PackageInfo) {
        self.info = Some(info);
    }

    pub(crate) fn set_owner(&mut self, owner: OwnerRef) {
        self.owner = Some(owner);
    }
}

impl From<PackageSummary> for Package {
    fn from(summary: PackageSummary) -> Self {
        Package::new(summary.name, summary.owner)
    }
}
