pub mod error;
pub mod http_transport;
pub mod observability;
pub mod terminal_dialogs;

pub use error::{CliError, Result};
pub use http_transport::HttpTransport;
pub use observability::LogConfig;
pub use terminal_dialogs::TerminalDialogs;
