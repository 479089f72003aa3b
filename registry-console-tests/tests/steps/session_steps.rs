use cucumber::{given, then, when};
use registry_console_core::testing::Reply;
use registry_console_core::{endpoint, CredentialsPrompt, Method};
use registry_console_tests::ConsoleWorld;
use serde_json::json;

#[given(expr = "the operator is logged in as {string}")]
async fn operator_logged_in(world: &mut ConsoleWorld, login: String) {
    world.transport.reply_always(
        Method::Get,
        &endpoint::login(),
        Reply::ok(json!({"login": login, "is_admin": true})),
    );
}

#[given("the registry rejects the session check")]
async fn session_check_rejected(world: &mut ConsoleWorld) {
    world.transport.reply_always(
        Method::Get,
        &endpoint::login(),
        Reply::error(401, "Unauthorized", "Not logged in"),
    );
}

#[given("the registry rejects the next session check")]
async fn next_session_check_rejected(world: &mut ConsoleWorld) {
    world.transport.reply_once(
        Method::Get,
        &endpoint::login(),
        Reply::error(401, "Unauthorized", "Not logged in"),
    );
}

#[given(expr = "the registry accepts the login of {string}")]
async fn registry_accepts_login(world: &mut ConsoleWorld, login: String) {
    world.transport.reply_always(
        Method::Post,
        &endpoint::login(),
        Reply::ok(json!({"login": login, "is_admin": true})),
    );
}

#[given("the registry refuses the next login")]
async fn registry_refuses_next_login(world: &mut ConsoleWorld) {
    world.transport.reply_once(
        Method::Post,
        &endpoint::login(),
        Reply::error(401, "Unauthorized", "Invalid credentials"),
    );
}

#[given(expr = "the operator will log in as {string} with {string}")]
async fn operator_will_log_in(world: &mut ConsoleWorld, login: String, password: String) {
    world.dialogs.submit_login(&login, &password);
}

#[given("the operator will dismiss the login prompt")]
async fn operator_will_dismiss(world: &mut ConsoleWorld) {
    world
        .dialogs
        .answer_credentials(CredentialsPrompt::Dismissed);
}

#[when("the operator opens the packages page")]
async fn operator_opens_packages_page(world: &mut ConsoleWorld) {
    let tree = world.console.tree().clone();
    let loads = world.loads.clone();
    let result = world
        .console
        .session()
        .run(|| async move {
            loads.set(loads.get() + 1);
            tree.load_packages().await
        })
        .await;
    world.record(result);
}

#[then(expr = "the login prompt should have been shown {int} time(s)")]
async fn login_prompt_shown(world: &mut ConsoleWorld, count: usize) {
    assert_eq!(world.dialogs.credential_requests(), count);
}

#[then(expr = "the packages should have been loaded {int} time(s)")]
async fn packages_loaded(world: &mut ConsoleWorld, count: usize) {
    assert_eq!(world.loads.get(), count);
}

#[then(expr = "the session should belong to {string}")]
async fn session_belongs_to(world: &mut ConsoleWorld, login: String) {
    let session = world.console.session().session().expect("active session");
    assert_eq!(session.login, login);
}
