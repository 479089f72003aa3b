//! JSON schemas of the payloads exchanged with the registry API

use crate::infrastructure::{CliError, Result};
use registry_console_core::{
    Credentials, HiddenUpdate, NewUser, OwnerUpdate, PackageDetailPayload, PackageSummary,
    SessionInfo, User, UserDetail, UserPatch, VersionDetail,
};
use schemars::schema::RootSchema;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

fn schemas() -> Vec<(&'static str, RootSchema)> {
    vec![
        ("credentials", schema_for!(Credentials)),
        ("session", schema_for!(SessionInfo)),
        ("package-summary", schema_for!(Vec<PackageSummary>)),
        ("package-detail", schema_for!(PackageDetailPayload)),
        ("owner-update", schema_for!(OwnerUpdate)),
        ("version-detail", schema_for!(VersionDetail)),
        ("hidden-update", schema_for!(HiddenUpdate)),
        ("user", schema_for!(User)),
        ("user-detail", schema_for!(UserDetail)),
        ("new-user", schema_for!(NewUser)),
        ("user-patch", schema_for!(UserPatch)),
    ]
}

/// Write one `<name>.schema.json` per payload into `dir`, creating it if needed
pub fn export(dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        return Err(CliError::invalid_directory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (name, schema) in schemas() {
        let path = dir.join(format!("{name}.schema.json"));
        let text = serde_json::to_string_pretty(&schema)
            .map_err(|e| CliError::SchemaGeneration(format!("{name}: {e}")))?;
        fs::write(&path, text)?;
        tracing::debug!(path = %path.display(), "Schema written");
        written.push(path);
    }
    Ok(written)
}
