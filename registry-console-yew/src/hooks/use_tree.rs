use registry_console_core::Package;
use yew::prelude::*;

use super::use_console;

/// Snapshot of the package list (convenience wrapper)
#[hook]
pub fn use_packages() -> Vec<Package> {
    use_console().console.tree().packages()
}
