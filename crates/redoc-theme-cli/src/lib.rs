//! Command-line front end for `redoc-theme`.
//!
//! Loads a plugin config, resolves the global data, and prints the bundle,
//! per-render options, token tables or plugin metadata as JSON or YAML.

pub mod cli;
pub mod output;

pub use cli::{run, Cli};
pub use output::OutputFormat;
