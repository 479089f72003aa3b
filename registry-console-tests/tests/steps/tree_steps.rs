use super::names;
use cucumber::{then, when};
use registry_console_core::{OwnerRef, PackageActions, VersionActions};
use registry_console_tests::ConsoleWorld;

#[when("the operator loads the packages")]
async fn operator_loads_packages(world: &mut ConsoleWorld) {
    let result = world.console.tree().load_packages().await;
    world.record(result);
}

#[when(expr = "the operator expands {string}")]
async fn operator_expands(world: &mut ConsoleWorld, name: String) {
    let result = world.console.tree().expand(&name).await;
    world.record(result);
}

#[when(expr = "the operator collapses {string}")]
async fn operator_collapses(world: &mut ConsoleWorld, name: String) {
    world.console.tree().collapse(&name);
}

#[when(expr = "the operator starts refreshing {string}")]
async fn operator_starts_refresh(world: &mut ConsoleWorld, name: String) {
    let tree = world.console.tree().clone();
    world.spawn(async move { tree.refresh(&name).await });
    world.settle();
}

#[when(expr = "the operator opens version {string} of {string}")]
async fn operator_opens_version(world: &mut ConsoleWorld, version: String, package: String) {
    let handle = world.console.tree().version_actions(&package, &version);
    let result = handle.fetch_detail().await;
    world.record(result);
}

#[when(expr = "the operator removes version {string} of {string}")]
async fn operator_removes_version(world: &mut ConsoleWorld, version: String, package: String) {
    let handle = world.console.tree().version_actions(&package, &version);
    let result = handle.remove().await;
    world.last_outcome = world.record(result);
}

#[when(expr = "the operator hides version {string} of {string}")]
async fn operator_hides_version(world: &mut ConsoleWorld, version: String, package: String) {
    let handle = world.console.tree().version_actions(&package, &version);
    let result = handle.hide().await;
    world.last_outcome = world.record(result);
}

#[when(expr = "the operator removes package {string}")]
async fn operator_removes_package(world: &mut ConsoleWorld, package: String) {
    let handle = world.console.tree().package_actions(&package);
    let result = handle.remove().await;
    world.last_outcome = world.record(result);
}

#[when(expr = "the operator gives {string} to {string}")]
async fn operator_changes_owner(world: &mut ConsoleWorld, package: String, owner: String) {
    let owner = OwnerRef::parse(&owner);
    let result = match world.console.users().resolve_owner(&owner).await {
        Ok(id) => {
            let handle = world.console.tree().package_actions(&package);
            handle.change_owner(id).await
        }
        Err(e) => Err(e),
    };
    world.record(result);
}

#[then(expr = "the package list should be {string}")]
async fn package_list_is(world: &mut ConsoleWorld, expected: String) {
    let listed: Vec<String> = world
        .console
        .tree()
        .packages()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(listed, names(&expected));
}

#[then(expr = "package {string} should have versions {string}")]
async fn package_has_versions(world: &mut ConsoleWorld, package: String, expected: String) {
    let package = world
        .console
        .tree()
        .package(&package)
        .unwrap_or_else(|| panic!("Package '{}' is not listed", package));
    let info = package
        .info()
        .unwrap_or_else(|| panic!("Package '{}' has no versions attached", package.name()));
    let versions: Vec<String> = info.versions().iter().map(|v| v.name().to_string()).collect();
    assert_eq!(versions, names(&expected));
}

#[then(expr = "no version of {string} should have details")]
async fn no_version_details(world: &mut ConsoleWorld, package: String) {
    let package = world.console.tree().package(&package).expect("listed package");
    let info = package.info().expect("versions attached");
    assert!(info.versions().iter().all(|v| v.detail().is_none()));
}

#[then(expr = "version {string} of {string} should show details that are not hidden")]
async fn version_detail_not_hidden(world: &mut ConsoleWorld, version: String, package: String) {
    let package = world.console.tree().package(&package).expect("listed package");
    let node = package
        .info()
        .and_then(|info| info.version(&version))
        .unwrap_or_else(|| panic!("Version '{}' is not attached", version));
    let detail = node.detail().expect("fetched detail");
    assert!(!detail.hidden);
}

#[then(expr = "{string} should be expanded")]
async fn package_expanded(world: &mut ConsoleWorld, package: String) {
    assert!(world.console.tree().is_expanded(&package));
}

#[then(expr = "{string} should be collapsed")]
async fn package_collapsed(world: &mut ConsoleWorld, package: String) {
    assert!(!world.console.tree().is_expanded(&package));
}

#[then(expr = "package {string} should be owned by {string}")]
async fn package_owned_by(world: &mut ConsoleWorld, package: String, owner: String) {
    let package = world.console.tree().package(&package).expect("listed package");
    assert_eq!(package.owner(), Some(&OwnerRef::parse(&owner)));
}
