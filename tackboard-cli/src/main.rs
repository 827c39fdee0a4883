//! Tackboard CLI
//!
//! Commands:
//! - `tackboard run <FILE>`: execute a JSON or YAML batch of operations
//! - `tackboard shell`: execute JSON operations read line by line from stdin
//! - `tackboard ops`: list operations and their parameters
//!
//! Exit codes:
//! - 0: Success
//! - 1: An operation failed, or the input/config could not be read

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tackboard_cli::run::{run_file, run_ops, run_shell};
use tackboard_cli::{Cli, Commands, ConfigLoader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn execute(cli: Cli) -> anyhow::Result<i32> {
    let settings = ConfigLoader::new()
        .with_config_file(cli.config.clone())
        .load(&cli.overrides())?;

    // --debug wins over RUST_LOG, which wins over the configured level
    let filter = if cli.debug {
        EnvFilter::new("tackboard=debug,tackboard_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Run { file, fail_fast } => run_file(&settings, &file, fail_fast, &mut stdout).await,
        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_shell(&settings, stdin, &mut stdout).await
        }
        Commands::Ops { json } => run_ops(json, &mut stdout),
    }
}
