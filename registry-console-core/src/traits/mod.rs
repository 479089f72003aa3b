//! Seams between the console core and its surroundings

pub mod actions;
pub mod dialogs;
pub mod transport;

pub use actions::{ActionOutcome, PackageActions, VersionActions};
pub use dialogs::{CredentialsPrompt, Dialogs};
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
