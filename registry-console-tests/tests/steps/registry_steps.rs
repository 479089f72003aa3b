use super::{docstring, json_docstring, method};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use registry_console_core::testing::Reply;
use registry_console_core::ActionOutcome;
use registry_console_tests::ConsoleWorld;

#[given(expr = "the registry answers {word} {string} with:")]
async fn registry_answers(world: &mut ConsoleWorld, verb: String, path: String, step: &Step) {
    world
        .transport
        .reply_always(method(&verb), &path, Reply::ok(json_docstring(step)));
}

#[given(expr = "the registry answers {word} {string} once with:")]
async fn registry_answers_once(world: &mut ConsoleWorld, verb: String, path: String, step: &Step) {
    world
        .transport
        .reply_once(method(&verb), &path, Reply::ok(json_docstring(step)));
}

#[given(expr = "the registry accepts {word} {string}")]
async fn registry_accepts(world: &mut ConsoleWorld, verb: String, path: String) {
    world
        .transport
        .reply_always(method(&verb), &path, Reply::empty());
}

#[given(expr = "the registry fails {word} {string} with status {int} saying {string}")]
async fn registry_fails(
    world: &mut ConsoleWorld,
    verb: String,
    path: String,
    status: u16,
    message: String,
) {
    world
        .transport
        .reply_always(method(&verb), &path, Reply::error(status, "Error", &message));
}

#[given(expr = "the registry holds {word} {string}")]
async fn registry_holds(world: &mut ConsoleWorld, verb: String, path: String) {
    world.transport.hold(method(&verb), &path);
}

#[when(expr = "the registry releases one {word} {string}")]
async fn registry_releases_one(world: &mut ConsoleWorld, verb: String, path: String) {
    assert!(
        world.transport.release_one(method(&verb), &path),
        "No parked {} {} request",
        verb,
        path
    );
    world.settle();
}

#[given("the operator will decline the confirmation")]
async fn operator_declines(world: &mut ConsoleWorld) {
    world.dialogs.answer_confirm(false);
}

#[then(expr = "the registry should have received {int} {word} request(s) for {string}")]
async fn registry_received(world: &mut ConsoleWorld, count: usize, verb: String, path: String) {
    assert_eq!(world.transport.count(method(&verb), &path), count);
}

#[then("the operator should have been notified:")]
async fn operator_notified(world: &mut ConsoleWorld, step: &Step) {
    let expected = docstring(step);
    let alerts = world.dialogs.alerts();
    assert!(
        alerts.iter().any(|alert| alert == expected),
        "Expected alert '{}', got {:?}",
        expected,
        alerts
    );
}

#[then(expr = "the operator should see the error {string} saying {string}")]
async fn operator_sees_error(world: &mut ConsoleWorld, title: String, message: String) {
    assert!(
        world.dialogs.errors().contains(&(title.clone(), message.clone())),
        "Expected error '{}: {}', got {:?}",
        title,
        message,
        world.dialogs.errors()
    );
}

#[then("the operator should not see any error")]
async fn operator_sees_no_error(world: &mut ConsoleWorld) {
    assert!(world.dialogs.errors().is_empty(), "{:?}", world.dialogs.errors());
}

#[then(expr = "the last operation should fail with {string}")]
async fn last_operation_fails(world: &mut ConsoleWorld, expected: String) {
    let message = world
        .last_error_message()
        .unwrap_or_else(|| panic!("Expected failure '{}', the operation succeeded", expected));
    assert!(
        message.contains(&expected),
        "Expected failure '{}', got '{}'",
        expected,
        message
    );
}

#[then("the action should be completed")]
async fn action_completed(world: &mut ConsoleWorld) {
    assert_eq!(world.last_outcome, Some(ActionOutcome::Completed));
}

#[then("the action should be cancelled")]
async fn action_cancelled(world: &mut ConsoleWorld) {
    assert_eq!(world.last_outcome, Some(ActionOutcome::Cancelled));
}
