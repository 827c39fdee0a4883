//! CLI definition for the `tackboard` binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;
use crate::output::OutputFormat;

/// Tackboard - densely ordered boards, todo lists and practice logs.
///
/// Operations are JSON objects such as `{"op": "move card", "id": 2,
/// "list_id": 1, "position": 0}`; looser forms like `{"move": "card", ...}`
/// or bare parameters are accepted too.
#[derive(Parser, Debug)]
#[command(name = "tackboard")]
#[command(version)]
#[command(about = "Run tackboard operations against an in-memory workspace")]
#[command(
    long_about = "Run tackboard operations against an in-memory workspace.\n\n\
    Configuration is read from ~/.config/tackboard/config.toml, then \
    tackboard.toml/.yaml/.json in the working directory (or --config), \
    then TACKBOARD_* environment variables, then flags.\n\n\
    Environment variables:\n  \
    TACKBOARD_LOG_LEVEL       Default log filter (overridden by RUST_LOG)\n  \
    TACKBOARD_WEEK_START      monday or sunday\n  \
    TACKBOARD_ACTIVITY_LIMIT  Activity entries kept in memory (0 disables)\n  \
    TACKBOARD_ACTOR           Actor recorded on activity entries\n  \
    TACKBOARD_OUTPUT          json or yaml"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of the working directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Actor recorded on activity entries
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Result format for `run`
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flag values that take precedence over every config source
    pub fn overrides(&self) -> Overrides {
        Overrides {
            actor: self.actor.clone(),
            output: self.output,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a JSON or YAML batch of operations
    Run {
        /// Batch file (an operation object or an array of them)
        file: PathBuf,
        /// Stop at the first failed operation
        #[arg(long)]
        fail_fast: bool,
    },

    /// Read one JSON operation per line from stdin until EOF
    Shell,

    /// List available operations and their parameters
    Ops {
        /// Output the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}
