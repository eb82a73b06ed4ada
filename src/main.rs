//! zcalc CLI - evaluate arithmetic expressions from the terminal.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{EnvFilter, fmt};
use zcalc::config::Config;

fn main() -> Result<()> {
    // RUST_LOG controls the log level, WARN when unset
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Eval(args) => commands::eval::run(args, &config),
        Command::Repl(args) => commands::repl::run(args, &config),
    }
}
