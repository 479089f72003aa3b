mod console;
mod error;
mod gateway;
mod loading;
mod session_gate;
mod tree;
mod users;

pub use console::Console;
pub use error::{ConsoleError, GatewayError, Result};
pub use gateway::{Call, Gateway};
pub use loading::LoadingTracker;
pub use session_gate::{LoginOutcome, SessionGate};
pub use tree::{PackageHandle, TreeSynchronizer, VersionHandle};
pub use users::UserAdmin;
