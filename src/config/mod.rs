//! Project configuration (`.passtable.toml`).

pub mod settings;

pub use settings::{GeneratorSettings, Settings};
