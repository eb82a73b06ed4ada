//! Expression evaluation entry points and result formatting.
//!
//! [`evaluate`] runs the engine pipeline:
//! preprocess -> tokenize -> shunting-yard -> postfix evaluation.
//! [`evaluate_expression`] wraps it for front-ends that need display strings.

use tracing::debug;

use super::error::EvaluationError;
use super::postfix::evaluate_postfix;
use super::preprocess::preprocess;
use super::shunting_yard::to_postfix;
use super::token::format_tokens;
use super::tokenizer::tokenize;

/// Evaluate a raw, human-typed expression.
///
/// Empty or whitespace-only input fails with [`EvaluationError::Empty`].
pub fn evaluate(raw: &str) -> Result<f64, EvaluationError> {
    let canonical = preprocess(raw);
    if canonical.is_empty() {
        return Err(EvaluationError::Empty);
    }
    debug!(raw, canonical = %canonical, "preprocessed expression");

    let tokens = tokenize(&canonical)?;
    let postfix = to_postfix(&tokens)?;
    debug!(postfix = %format_tokens(&postfix), "converted to postfix");

    let value = evaluate_postfix(&postfix)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

/// How numbers are rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Maximum number of fractional digits shown.
    pub decimal_places: usize,
    /// Separator inserted every three integer digits, if any.
    pub group_separator: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            decimal_places: 10,
            group_separator: Some(",".to_string()),
        }
    }
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug)]
pub enum CalcResult {
    /// Successful calculation with a finite numeric result.
    Success {
        /// The original expression, trimmed.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display (with grouping separators).
        display_result: String,
        /// Raw number that evaluates back to `value`.
        raw_result: String,
    },
    /// Evaluation failed.
    Error {
        /// The original expression, trimmed.
        expression: String,
        /// What went wrong.
        error: EvaluationError,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the raw result string (only for successful results).
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Success { raw_result, .. } => Some(raw_result),
            Self::Error { .. } => None,
        }
    }

    /// Get the error kind (only for failed evaluations).
    pub fn error(&self) -> Option<&EvaluationError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Evaluate an expression and format the outcome.
///
/// Returns `None` for empty input, which front-ends treat as a no-op.
pub fn evaluate_expression(input: &str, options: &DisplayOptions) -> Option<CalcResult> {
    let expression = input.trim().to_string();

    match evaluate(&expression) {
        Ok(value) => Some(CalcResult::Success {
            display_result: format_display(value, options),
            raw_result: format_raw(value),
            expression,
            value,
        }),
        Err(EvaluationError::Empty) => None,
        Err(error) => Some(CalcResult::Error {
            expression,
            message: error.to_string(),
            error,
        }),
    }
}

/// Format a number for display with grouping separators.
///
/// Fractional digits are rounded to `decimal_places` and trailing zeros are
/// trimmed. Negative zero is shown as `0`.
pub fn format_display(value: f64, options: &DisplayOptions) -> String {
    let mut formatted = format!("{:.*}", options.decimal_places, value);
    if formatted.contains('.') {
        let trimmed_len = formatted.trim_end_matches('0').trim_end_matches('.').len();
        formatted.truncate(trimmed_len);
    }

    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let grouped = match &options.group_separator {
        Some(separator) => group_digits(int_part, separator),
        None => int_part.to_string(),
    };

    let is_zero = grouped == "0" && frac_part.is_empty();
    if negative && !is_zero {
        format!("-{grouped}{frac_part}")
    } else {
        format!("{grouped}{frac_part}")
    }
}

/// Insert `separator` every three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Format a number so that it evaluates back to the same value.
///
/// Uses the shortest round-trip representation, without exponent notation.
pub fn format_raw(value: f64) -> String {
    // Adding zero folds -0 into 0.
    format!("{}", value + 0.0)
}
