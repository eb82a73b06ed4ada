//! The `eval` command - evaluate a single expression.

use anyhow::{Result, bail};

use zcalc::calculator::{CalcResult, evaluate_expression};
use zcalc::config::Config;

use crate::cli::EvalArgs;

/// Run the eval command.
pub fn run(args: EvalArgs, config: &Config) -> Result<()> {
    let Some(result) = evaluate_expression(&args.expression, &config.display_options()) else {
        bail!("Empty expression");
    };

    match result {
        CalcResult::Success {
            display_result,
            raw_result,
            ..
        } => {
            if args.raw {
                println!("{raw_result}");
            } else {
                println!("{display_result}");
            }
            Ok(())
        }
        CalcResult::Error { message, .. } => bail!(message),
    }
}
