//! The `repl` command - an interactive calculator session.
//!
//! Each line is appended to the current expression and evaluated. A blank
//! line evaluates what is already there. Lines starting with `:` are
//! commands, see [`HELP`].

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use tracing::debug;

use zcalc::calculator::CalcResult;
use zcalc::config::Config;
use zcalc::session::Session;

use crate::cli::ReplArgs;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  :clear     clear the current expression
  :back      delete the last character
  :neg       toggle the sign of the trailing number
  :history   show previous results
  :help      show this help
  :quit      exit";

/// Run the repl command on stdin/stdout.
pub fn run(args: ReplArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(limit) = args.history_limit {
        config.history_limit = limit;
    }
    let mut session = Session::from_config(&config);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    repl(stdin.lock(), io::stdout().lock(), &mut session, interactive)
}

/// Drive a session from line-based input.
fn repl<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    session: &mut Session,
    interactive: bool,
) -> Result<()> {
    if interactive {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            if !run_command(command.trim(), session, &mut out)? {
                break;
            }
        } else {
            session.input(line);
            match session.evaluate() {
                Some(CalcResult::Success { display_result, .. }) => {
                    writeln!(out, "{display_result}")?;
                }
                Some(CalcResult::Error { message, .. }) => {
                    writeln!(out, "Error: {message}")?;
                }
                None => {}
            }
        }

        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Execute a `:` command. Returns `false` when the session should end.
fn run_command<W: Write>(command: &str, session: &mut Session, out: &mut W) -> Result<bool> {
    debug!(command, "repl command");

    match command {
        "q" | "quit" | "exit" => return Ok(false),
        "c" | "clear" => session.clear(),
        "back" => {
            session.backspace();
            writeln!(out, "{}", session.expression())?;
        }
        "neg" => {
            session.toggle_sign();
            writeln!(out, "{}", session.expression())?;
        }
        "history" => {
            if session.history().is_empty() {
                writeln!(out, "(no history)")?;
            }
            for entry in session.history().iter() {
                writeln!(out, "{entry}")?;
            }
        }
        "help" => writeln!(out, "{HELP}")?,
        other => writeln!(out, "Unknown command: :{other}")?,
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(input: &str) -> String {
        let mut session = Session::default();
        let mut out = Vec::new();
        repl(input.as_bytes(), &mut out, &mut session, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_evaluates_each_line() {
        assert_eq!(run_lines("2+3*4\n(2+3)*4\n"), "14\n20\n");
    }

    #[test]
    fn test_continues_from_previous_result() {
        assert_eq!(run_lines("10*10\n*10\n"), "100\n1,000\n");
    }

    #[test]
    fn test_error_resets_session() {
        assert_eq!(
            run_lines("10/0\n+1\n"),
            "Error: Cannot divide by zero\nError: Invalid expression\n"
        );
    }

    #[test]
    fn test_blank_line_is_noop_when_empty() {
        assert_eq!(run_lines("\n\n"), "");
    }

    #[test]
    fn test_neg_and_back() {
        assert_eq!(run_lines("5\n:neg\n\n:back\n"), "5\n-5\n-5\n-\n");
    }

    #[test]
    fn test_history() {
        let output = run_lines("1+1\n:clear\n2*3\n:history\n");
        assert_eq!(output, "2\n6\n2*3 = 6\n1+1 = 2\n");
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(run_lines(":history\n"), "(no history)\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        assert_eq!(run_lines("1+1\n:quit\n2+2\n"), "2\n");
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(run_lines(":foo\n"), "Unknown command: :foo\n");
    }
}
