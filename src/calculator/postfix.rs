//! Postfix (RPN) evaluation on an operand stack.

use super::error::EvaluationError;
use super::token::{Operator, Token};

/// Evaluate a postfix sequence to a single finite number.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EvaluationError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),

            Token::Root => {
                let a = stack.pop().ok_or(EvaluationError::InvalidExpression)?;
                if a < 0.0 {
                    return Err(EvaluationError::DomainError);
                }
                stack.push(a.sqrt());
            }

            Token::Operator(op) => {
                let b = stack.pop();
                let a = stack.pop();
                stack.push(apply(op, a, b)?);
            }

            Token::LeftParen | Token::RightParen | Token::Negate => {
                return Err(EvaluationError::UnknownOperator(token.to_string()));
            }
        }
    }

    let result = match stack.as_slice() {
        [value] => *value,
        _ => return Err(EvaluationError::InvalidExpression),
    };

    if !result.is_finite() {
        return Err(EvaluationError::InvalidResult);
    }

    Ok(result)
}

/// Apply a binary operator to the popped operands, `b` being the top.
///
/// `%` alone accepts a missing left operand and reads `b` as a fraction.
fn apply(op: Operator, a: Option<f64>, b: Option<f64>) -> Result<f64, EvaluationError> {
    let Some(b) = b else {
        return Err(match op {
            Operator::Percent => EvaluationError::InvalidOperation,
            _ => EvaluationError::InvalidExpression,
        });
    };

    match (op, a) {
        (Operator::Percent, Some(a)) => Ok(a * (b / 100.0)),
        (Operator::Percent, None) => Ok(b / 100.0),
        (_, None) => Err(EvaluationError::InvalidExpression),
        (Operator::Add, Some(a)) => Ok(a + b),
        (Operator::Subtract, Some(a)) => Ok(a - b),
        (Operator::Multiply, Some(a)) => Ok(a * b),
        (Operator::Divide, Some(_)) if b == 0.0 => Err(EvaluationError::DivisionByZero),
        (Operator::Divide, Some(a)) => Ok(a / b),
        (Operator::Power, Some(a)) => Ok(a.powf(b)),
    }
}
