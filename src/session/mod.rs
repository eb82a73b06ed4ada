//! Calculator session state.
//!
//! A session owns the expression being typed and the history of results.
//! It is the glue a front-end drives: append input, edit it, evaluate it.

mod history;

pub use history::{History, HistoryEntry};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::calculator::{CalcResult, DisplayOptions, evaluate_expression};
use crate::config::Config;

lazy_static! {
    /// The trailing number, its optional sign, and what precedes the sign.
    static ref TRAILING_NUMBER: Regex = Regex::new(
        r"(^|[-+*/^%(√])(-?)([0-9]+(?:\.[0-9]*)?)$"
    ).unwrap();
}

/// Expression buffer plus history of past calculations.
#[derive(Clone, Debug)]
pub struct Session {
    expression: String,
    history: History,
    options: DisplayOptions,
}

impl Session {
    pub fn new(options: DisplayOptions, history_limit: usize) -> Self {
        Self {
            expression: String::new(),
            history: History::new(history_limit),
            options,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.display_options(), config.history_limit)
    }

    /// The expression typed so far.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Append raw text to the expression.
    pub fn input(&mut self, text: &str) {
        self.expression.push_str(text);
    }

    pub fn clear(&mut self) {
        self.expression.clear();
    }

    /// Remove the last character. Returns `false` if there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        self.expression.pop().is_some()
    }

    /// Negate the trailing number of the expression.
    ///
    /// Adds a sign in front of it, or removes one that is already there.
    /// Returns `false` when the expression does not end in a number.
    pub fn toggle_sign(&mut self) -> bool {
        let Some(caps) = TRAILING_NUMBER.captures(&self.expression) else {
            return false;
        };
        let (Some(sign), Some(number)) = (caps.get(2), caps.get(3)) else {
            return false;
        };

        let toggled = if sign.is_empty() {
            format!(
                "{}-{}",
                &self.expression[..number.start()],
                number.as_str()
            )
        } else {
            format!(
                "{}{}",
                &self.expression[..sign.start()],
                number.as_str()
            )
        };

        self.expression = toggled;
        true
    }

    /// Evaluate the current expression.
    ///
    /// An empty expression is a no-op and returns `None`. On success the
    /// calculation is recorded and the expression is replaced by the raw
    /// result, so typing can continue from it. On failure the expression is
    /// cleared.
    pub fn evaluate(&mut self) -> Option<CalcResult> {
        let result = evaluate_expression(&self.expression, &self.options)?;

        match &result {
            CalcResult::Success { raw_result, .. } => {
                if let Some(entry) = HistoryEntry::from_calc_result(&result) {
                    self.history.push(entry);
                }
                self.expression = raw_result.clone();
            }
            CalcResult::Error { error, .. } => {
                debug!(expression = result.expression(), %error, "evaluation failed");
                self.expression.clear();
            }
        }

        Some(result)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
