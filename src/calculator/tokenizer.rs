//! Splits a preprocessed expression into tokens.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::EvaluationError;
use super::token::{Operator, Token};

lazy_static! {
    /// A number, the root symbol, or a single operator/parenthesis.
    static ref TOKEN: Regex = Regex::new(
        r"[0-9]+(?:\.[0-9]+)?|√|[-+*/^%()]"
    ).unwrap();
}

/// Tokenize a preprocessed expression.
///
/// The matches must cover the whole input. A stray character anywhere, or an
/// input without any token, fails with [`EvaluationError::InvalidExpression`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut expected_start = 0;

    for m in TOKEN.find_iter(input) {
        if m.start() != expected_start {
            return Err(EvaluationError::InvalidExpression);
        }
        expected_start = m.end();
        tokens.push(lex(m.as_str())?);
    }

    if expected_start != input.len() || tokens.is_empty() {
        return Err(EvaluationError::InvalidExpression);
    }

    Ok(tokens)
}

fn lex(text: &str) -> Result<Token, EvaluationError> {
    match text {
        "(" => Ok(Token::LeftParen),
        ")" => Ok(Token::RightParen),
        "√" => Ok(Token::Root),
        _ => {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && let Some(op) = Operator::from_symbol(c)
            {
                return Ok(Token::Operator(op));
            }

            let value: f64 = text
                .parse()
                .map_err(|_| EvaluationError::InvalidExpression)?;
            if !value.is_finite() {
                return Err(EvaluationError::InvalidExpression);
            }
            Ok(Token::Number(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens = tokenize("2+3.5*(4)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Operator(Operator::Add),
                Token::Number(3.5),
                Token::Operator(Operator::Multiply),
                Token::LeftParen,
                Token::Number(4.0),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_root_and_operators() {
        let tokens = tokenize("√9^2%-1/2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Root,
                Token::Number(9.0),
                Token::Operator(Operator::Power),
                Token::Number(2.0),
                Token::Operator(Operator::Percent),
                Token::Operator(Operator::Subtract),
                Token::Number(1.0),
                Token::Operator(Operator::Divide),
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_stray_characters_rejected() {
        assert_eq!(tokenize("2$3"), Err(EvaluationError::InvalidExpression));
        assert_eq!(tokenize("abc"), Err(EvaluationError::InvalidExpression));
        assert_eq!(tokenize("1+2x"), Err(EvaluationError::InvalidExpression));
    }

    #[test]
    fn test_dangling_decimal_point_rejected() {
        assert_eq!(tokenize("5."), Err(EvaluationError::InvalidExpression));
        assert_eq!(tokenize(".5"), Err(EvaluationError::InvalidExpression));
        assert_eq!(tokenize("1..2"), Err(EvaluationError::InvalidExpression));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(tokenize(""), Err(EvaluationError::InvalidExpression));
    }

    #[test]
    fn test_overflowing_literal_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(tokenize(&huge), Err(EvaluationError::InvalidExpression));
    }
}
