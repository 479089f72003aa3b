use cucumber::{given, then, when};
use registry_console_core::{Call, ConsoleError};
use registry_console_tests::ConsoleWorld;

fn start(world: &mut ConsoleWorld, call: Call) {
    let gateway = world.console.gateway().clone();
    world.spawn(async move {
        gateway
            .call(call)
            .await
            .map(|_| ())
            .map_err(ConsoleError::from)
    });
    world.settle();
}

#[when(expr = "the operator starts a {word} call to {string}")]
async fn operator_starts_call(world: &mut ConsoleWorld, verb: String, path: String) {
    let call = Call::parse(&verb, path).expect("supported method");
    start(world, call);
}

#[when(expr = "the operator starts a background {word} call to {string}")]
async fn operator_starts_background_call(world: &mut ConsoleWorld, verb: String, path: String) {
    let call = Call::parse(&verb, path).expect("supported method").background();
    start(world, call);
}

#[when(expr = "the operator calls {word} {string}")]
async fn operator_calls(world: &mut ConsoleWorld, verb: String, path: String) {
    let result = match Call::parse(&verb, path) {
        Ok(call) => world.console.gateway().call(call).await,
        Err(err) => Err(err),
    };
    world.record(result.map_err(ConsoleError::from));
}

#[given(expr = "the endpoint {string} is marked {word}")]
async fn endpoint_is_marked(world: &mut ConsoleWorld, endpoint: String, state: String) {
    match state.as_str() {
        "busy" => world.loading.mark_busy(&endpoint),
        "idle" => world.loading.mark_idle(&endpoint),
        other => panic!("Unknown endpoint state '{}'", other),
    }
}

#[when("the busy map is settled")]
async fn busy_map_settled(world: &mut ConsoleWorld) {
    world.settled = Some(world.loading.settle());
}

#[then("the busy map should report everything settled")]
async fn busy_map_reports_settled(world: &mut ConsoleWorld) {
    assert_eq!(world.settled, Some(true));
}

#[then("the busy map should report work in progress")]
async fn busy_map_reports_busy(world: &mut ConsoleWorld) {
    assert_eq!(world.settled, Some(false));
}

#[then(expr = "the busy map should track {int} endpoint(s)")]
async fn busy_map_tracks(world: &mut ConsoleWorld, count: usize) {
    assert_eq!(world.loading.len(), count);
}

#[then(expr = "{string} should be busy")]
async fn endpoint_busy(world: &mut ConsoleWorld, endpoint: String) {
    assert_eq!(world.loading.is_idle(&endpoint), Some(false));
}

#[then(expr = "{string} should be idle")]
async fn endpoint_idle(world: &mut ConsoleWorld, endpoint: String) {
    assert_eq!(world.loading.is_idle(&endpoint), Some(true));
}

#[then(expr = "{string} should not be tracked")]
async fn endpoint_untracked(world: &mut ConsoleWorld, endpoint: String) {
    assert_eq!(world.loading.is_idle(&endpoint), None);
}

#[then("the console should be loading")]
async fn console_loading(world: &mut ConsoleWorld) {
    assert!(world.loading.is_loading());
}

#[then("the console should not be loading")]
async fn console_not_loading(world: &mut ConsoleWorld) {
    assert!(!world.loading.is_loading());
}

#[then("every spawned call should have succeeded")]
async fn spawned_calls_succeeded(world: &mut ConsoleWorld) {
    assert!(world.spawned_errors().is_empty(), "{:?}", world.spawned_errors());
}
