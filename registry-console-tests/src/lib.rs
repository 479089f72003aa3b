//! Cucumber world driving the console core against in-memory doubles

use cucumber::World;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use registry_console_core::testing::{MockTransport, RecordingDialogs};
use registry_console_core::{ActionOutcome, Console, ConsoleError, LoadingTracker};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

#[derive(World)]
#[world(init = Self::new)]
pub struct ConsoleWorld {
    /// Backend double
    pub transport: MockTransport,

    /// Operator double
    pub dialogs: RecordingDialogs,

    /// Busy map shared with the console
    pub loading: LoadingTracker,

    /// The system under test
    pub console: Console,

    /// Executor for calls that must overlap
    pool: LocalPool,

    /// Errors of spawned calls
    spawned_errors: Rc<RefCell<Vec<String>>>,

    /// Last error of an awaited operation
    pub last_error: Option<ConsoleError>,

    /// Last outcome of a confirmed action
    pub last_outcome: Option<ActionOutcome>,

    /// Answer of the last settle of the busy map
    pub settled: Option<bool>,

    /// How many times a gated load ran
    pub loads: Rc<Cell<usize>>,
}

impl ConsoleWorld {
    pub fn new() -> Self {
        let transport = MockTransport::new();
        let dialogs = RecordingDialogs::new();
        let loading = LoadingTracker::new();
        let console = Console::with_loading(
            Rc::new(transport.clone()),
            Rc::new(dialogs.clone()),
            loading.clone(),
        );

        Self {
            transport,
            dialogs,
            loading,
            console,
            pool: LocalPool::new(),
            spawned_errors: Rc::new(RefCell::new(Vec::new())),
            last_error: None,
            last_outcome: None,
            settled: None,
            loads: Rc::new(Cell::new(0)),
        }
    }

    /// Start an operation without waiting for it; run with [`ConsoleWorld::settle`]
    pub fn spawn<F>(&self, operation: F)
    where
        F: Future<Output = Result<(), ConsoleError>> + 'static,
    {
        let errors = self.spawned_errors.clone();
        self.pool
            .spawner()
            .spawn_local(async move {
                if let Err(err) = operation.await {
                    errors.borrow_mut().push(err.to_string());
                }
            })
            .expect("local pool accepts tasks");
    }

    /// Drive spawned operations as far as the held routes allow
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn spawned_errors(&self) -> Vec<String> {
        self.spawned_errors.borrow().clone()
    }

    /// Keep the error of an awaited operation for later assertions
    pub fn record<T>(&mut self, result: Result<T, ConsoleError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }

    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(ToString::to_string)
    }
}

impl Default for ConsoleWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWorld")
            .field("requests", &self.transport.requests().len())
            .field("loading", &self.loading)
            .field("alerts", &self.dialogs.alerts())
            .field("last_error", &self.last_error)
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}
