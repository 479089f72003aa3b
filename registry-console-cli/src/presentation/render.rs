//! Plain-text and JSON rendering of command results

use crate::infrastructure::Result;
use registry_console_core::{Package, SessionInfo, User, UserDetail, VersionDetail};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Pretty JSON in JSON mode, the text rendering otherwise
    pub fn render<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Text => Ok(text(value)),
        }
    }
}

fn owner(package: &Package) -> String {
    package
        .owner()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

pub fn packages(packages: &Vec<Package>) -> String {
    if packages.is_empty() {
        return "No packages".to_string();
    }
    let width = packages.iter().map(|p| p.name().len()).max().unwrap_or(0);
    packages
        .iter()
        .map(|p| format!("{:width$}  {}", p.name(), owner(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn package(package: &Package) -> String {
    let mut out = format!("{} (owner {})", package.name(), owner(package));
    match package.info() {
        Some(info) => {
            if info.is_proxy() {
                out.push_str(" [proxy]");
            }
            for version in info.versions() {
                let _ = write!(out, "\n  {}", version.name());
            }
        }
        None => out.push_str("\n  (versions not loaded)"),
    }
    out
}

pub fn version_detail(detail: &VersionDetail) -> String {
    let mut out = String::new();
    let _ = write!(out, "version:   {}", detail.version);
    let fields = [
        ("summary", &detail.summary),
        ("author", &detail.author),
        ("email", &detail.author_email),
        ("license", &detail.license),
        ("home page", &detail.home_page),
    ];
    for (label, value) in fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            let _ = write!(out, "\n{:10} {}", format!("{label}:"), value);
        }
    }
    let _ = write!(out, "\ndownloads: {}", detail.downloads);
    if detail.hidden {
        out.push_str("\nhidden:    yes");
    }
    for file in &detail.files {
        let _ = write!(out, "\nfile:      {} {}", file.name, file.url);
    }
    out
}

pub fn user(user: &User) -> String {
    let mut flags = Vec::new();
    if user.is_admin {
        flags.push("admin");
    }
    if user.disabled {
        flags.push("disabled");
    }
    format!("{:>4}  {}  <{}>  {}", user.id, user.login, user.email, flags.join(","))
        .trim_end()
        .to_string()
}

pub fn users(users: &Vec<User>) -> String {
    if users.is_empty() {
        return "No users".to_string();
    }
    users.iter().map(user).collect::<Vec<_>>().join("\n")
}

pub fn user_detail(detail: &UserDetail) -> String {
    let mut out = user(&detail.user);
    if detail.packages.is_empty() {
        out.push_str("\n  owns no packages");
    }
    for package in &detail.packages {
        let _ = write!(out, "\n  {package}");
    }
    out
}

pub fn session(info: &SessionInfo) -> String {
    if info.is_admin {
        format!("Logged in as {} (admin)", info.login)
    } else {
        format!("Logged in as {}", info.login)
    }
}
