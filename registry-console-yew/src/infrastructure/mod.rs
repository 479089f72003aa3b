mod browser_dialogs;
mod gloo_transport;

pub use browser_dialogs::{BrowserDialogs, Notice};
pub use gloo_transport::GlooTransport;
