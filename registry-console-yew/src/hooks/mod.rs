mod use_console;
mod use_tree;

pub use use_console::{use_console, ConsoleContext};
pub use use_tree::use_packages;
