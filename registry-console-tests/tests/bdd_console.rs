mod steps;

use cucumber::World;
use registry_console_tests::ConsoleWorld;

const FEATURES: &str = "tests/features";

/// Report file next to the crate manifest
#[cfg(any(feature = "output-json", feature = "output-junit"))]
fn report(name: &str) -> std::fs::File {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
    std::fs::File::create(&path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", path.display(), e))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Each world drives its own executor, scenarios run one after another
    let runner = ConsoleWorld::cucumber().max_concurrent_scenarios(1);

    #[cfg(feature = "output-junit")]
    runner
        .with_writer(cucumber::writer::JUnit::new(
            report("registry-console-junit.xml"),
            0,
        ))
        .run(FEATURES)
        .await;

    #[cfg(all(feature = "output-json", not(feature = "output-junit")))]
    runner
        .with_writer(cucumber::writer::Json::new(report(
            "registry-console-cucumber.json",
        )))
        .run(FEATURES)
        .await;

    // A step without a matching definition fails the run instead of being skipped
    #[cfg(not(any(feature = "output-json", feature = "output-junit")))]
    runner.fail_on_skipped().run_and_exit(FEATURES).await;
}
