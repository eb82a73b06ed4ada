//! Command-line interface definitions.
//!
//! Only clap structs live here. Command implementations are in `commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// zcalc - evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an expression and print the result
    Eval(EvalArgs),

    /// Start an interactive calculator session
    Repl(ReplArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. "2(3+1)" or "200+10%"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Print the raw result without grouping separators or rounding
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `repl` command.
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Override the number of history entries kept
    #[arg(long, value_name = "N")]
    pub history_limit: Option<usize>,
}
