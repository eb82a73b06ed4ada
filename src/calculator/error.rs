//! Errors produced while evaluating an expression.

use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Every variant is terminal for the current evaluation. The `Display`
/// output is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The input was empty or whitespace-only.
    #[error("Empty expression")]
    Empty,
    /// The input could not be tokenized or has a malformed structure.
    #[error("Invalid expression")]
    InvalidExpression,
    /// Binary `/` with a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Square root of a negative operand.
    #[error("Square root of negative")]
    DomainError,
    /// `%` applied without any operand on the stack.
    #[error("Invalid percent operation")]
    InvalidOperation,
    /// The postfix sequence contained a symbol the evaluator does not know.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    /// The final value is infinite or NaN.
    #[error("Result is not a finite number")]
    InvalidResult,
}
