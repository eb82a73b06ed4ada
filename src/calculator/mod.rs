//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Canonicalize raw input (percent expansion, implicit multiplication)
//! - Tokenize and convert infix expressions to postfix
//! - Evaluate postfix sequences with typed errors
//! - Format results for display

mod error;
mod evaluation;
mod postfix;
mod preprocess;
mod shunting_yard;
mod token;
mod tokenizer;

pub use error::EvaluationError;
pub use evaluation::{
    CalcResult, DisplayOptions, evaluate, evaluate_expression, format_display, format_raw,
};
