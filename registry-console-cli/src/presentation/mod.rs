pub mod render;

pub use render::OutputFormat;
