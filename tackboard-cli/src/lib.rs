//! Command-line driver for the tackboard engine.
//!
//! Every invocation starts from an empty in-memory workspace; operations come
//! from a batch file (`run`) or stdin (`shell`).

pub mod cli;
pub mod config;
pub mod output;
pub mod run;

pub use cli::{Cli, Commands};
pub use config::{ConfigLoader, Overrides, Settings};
pub use output::OutputFormat;
