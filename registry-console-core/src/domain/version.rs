use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Downloadable distribution file of a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DistributionFile {
    pub name: String,
    pub url: String,
}

/// Per-version metadata as returned by the version endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct VersionDetail {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub maintainer_email: Option<String>,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub files: Vec<DistributionFile>,
    /// Remaining metadata (classifiers, requires, provides, ...) kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Body of the hide request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HiddenUpdate {
    pub hidden: bool,
}

/// Version view-node of an expanded package
///
/// Nodes are rebuilt wholesale whenever the parent package detail is fetched again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionNode {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<VersionDetail>,
}

impl VersionNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> Option<&VersionDetail> {
        self.detail.as_ref()
    }

    pub(crate) fn set_detail(&mut self, detail: VersionDetail) {
        self.detail = Some(detail);
    }
}
