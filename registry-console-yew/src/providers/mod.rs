mod console_provider;

pub use console_provider::{ConsoleProvider, ConsoleProviderProps};
