//! # Registry Console Yew Shell
//!
//! Browser front end of the registry administration console.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod infrastructure;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use app::App;
pub use config::{Config, ConfigError};
pub use hooks::{use_console, use_packages, ConsoleContext};
pub use infrastructure::{BrowserDialogs, GlooTransport, Notice};
pub use pages::{AdminPage, PackagesPage};
pub use providers::{ConsoleProvider, ConsoleProviderProps};
