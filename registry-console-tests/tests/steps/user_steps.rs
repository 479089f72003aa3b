use super::names;
use cucumber::{then, when};
use registry_console_core::{UserForm, UserPatch};
use registry_console_tests::ConsoleWorld;

#[when("the operator loads the users")]
async fn operator_loads_users(world: &mut ConsoleWorld) {
    let result = world.console.users().load_users().await;
    world.record(result);
}

#[when(expr = "the operator creates user {string} with email {string} and password {string}")]
async fn operator_creates_user(
    world: &mut ConsoleWorld,
    login: String,
    email: String,
    password: String,
) {
    let form = UserForm {
        login,
        email,
        password_first: password.clone(),
        password_second: password,
        is_admin: false,
    };
    let result = world.console.users().create(&form).await;
    world.record(result);
}

#[when(expr = "the operator creates user {string} with mismatching passwords")]
async fn operator_creates_user_with_mismatch(world: &mut ConsoleWorld, login: String) {
    let form = UserForm {
        login,
        email: String::new(),
        password_first: "one".to_string(),
        password_second: "two".to_string(),
        is_admin: false,
    };
    let result = world.console.users().create(&form).await;
    world.record(result);
}

#[when(expr = "the operator grants admin rights to user {int}")]
async fn operator_grants_admin(world: &mut ConsoleWorld, id: u64) {
    let patch = UserPatch {
        is_admin: Some(true),
        ..Default::default()
    };
    let result = world.console.users().modify(id, patch).await;
    world.record(result);
}

#[when(expr = "the operator removes user {int}")]
async fn operator_removes_user(world: &mut ConsoleWorld, id: u64) {
    let result = world.console.users().remove(id).await;
    world.last_outcome = world.record(result);
}

#[then(expr = "the user list should be {string}")]
async fn user_list_is(world: &mut ConsoleWorld, expected: String) {
    let logins: Vec<String> = world
        .console
        .users()
        .users()
        .into_iter()
        .map(|u| u.login)
        .collect();
    assert_eq!(logins, names(&expected));
}

#[then(expr = "user {int} should be an admin")]
async fn user_is_admin(world: &mut ConsoleWorld, id: u64) {
    let user = world
        .console
        .users()
        .user(id)
        .unwrap_or_else(|| panic!("User {} is not listed", id));
    assert!(user.is_admin);
}
