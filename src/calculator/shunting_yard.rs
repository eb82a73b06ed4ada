//! Infix to postfix conversion (shunting-yard).
//!
//! Rules beyond the textbook algorithm:
//! - A `-` is a sign when it opens the input or follows `(`, an operator or
//!   `√`. A sign in front of a number is folded into the literal. A sign in
//!   front of `(` or `√` becomes `0 <group> -` and negates that group only.
//! - `√` and a pending sign wait on the operator stack and are released
//!   right after the group or atom they precede.
//! - The pop rule uses `>=`, so every binary operator is left-associative,
//!   `^` included: `2^3^2` is `(2^3)^2`.

use super::error::EvaluationError;
use super::token::{Operator, Token};

/// Convert infix tokens into postfix (RPN) order.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];

        match token {
            Token::Number(_) => output.push(token),

            Token::Root => stack.push(token),

            Token::Operator(Operator::Subtract) if is_unary(tokens, i) => {
                match tokens.get(i + 1) {
                    Some(Token::Number(value)) => {
                        output.push(Token::Number(-value));
                        i += 1;
                    }
                    Some(Token::LeftParen | Token::Root) => {
                        output.push(Token::Number(0.0));
                        stack.push(Token::Negate);
                    }
                    _ => return Err(EvaluationError::InvalidExpression),
                }
            }

            Token::Operator(op) => {
                while let Some(top) = stack.last().and_then(Token::stack_precedence) {
                    if top < op.precedence() {
                        break;
                    }
                    output.extend(stack.pop().map(release));
                }
                stack.push(token);
            }

            Token::LeftParen => stack.push(token),

            Token::Negate => {
                output.push(Token::Number(0.0));
                stack.push(token);
            }

            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(release(top)),
                        None => return Err(EvaluationError::InvalidExpression),
                    }
                }
                while matches!(stack.last(), Some(Token::Root | Token::Negate)) {
                    output.extend(stack.pop().map(release));
                }
            }
        }

        i += 1;
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(EvaluationError::InvalidExpression);
        }
        output.push(release(top));
    }

    Ok(output)
}

/// Turn an operator stack entry into its postfix form.
fn release(token: Token) -> Token {
    match token {
        Token::Negate => Token::Operator(Operator::Subtract),
        other => other,
    }
}

/// Whether the token at `index` sits where an operand is expected.
fn is_unary(tokens: &[Token], index: usize) -> bool {
    match index.checked_sub(1) {
        None => true,
        Some(prev) => tokens[prev].expects_operand(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::format_tokens;
    use crate::calculator::tokenizer::tokenize;

    fn postfix(input: &str) -> Result<String, EvaluationError> {
        let tokens = tokenize(input)?;
        to_postfix(&tokens).map(|rpn| format_tokens(&rpn))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("8-3-2").unwrap(), "8 3 - 2 -");
        assert_eq!(postfix("2^3^2").unwrap(), "2 3 ^ 2 ^");
    }

    #[test]
    fn test_unary_minus_folds_into_number() {
        assert_eq!(postfix("-5+3").unwrap(), "-5 3 +");
        assert_eq!(postfix("3*-2").unwrap(), "3 -2 *");
        assert_eq!(postfix("(-4)").unwrap(), "-4");
    }

    #[test]
    fn test_unary_minus_before_group() {
        assert_eq!(postfix("-(2+3)").unwrap(), "0 2 3 + -");
        assert_eq!(postfix("2*-(3)").unwrap(), "2 0 3 - *");
    }

    #[test]
    fn test_unary_minus_before_root() {
        assert_eq!(postfix("-√4").unwrap(), "0 4 √ -");
        assert_eq!(postfix("10/-√4*5").unwrap(), "10 0 4 √ - / 5 *");
    }

    #[test]
    fn test_sign_binds_to_group_only() {
        assert_eq!(postfix("10/-(2)*5").unwrap(), "10 0 2 - / 5 *");
        assert_eq!(postfix("8/-(2)/2").unwrap(), "8 0 2 - / 2 /");
        assert_eq!(postfix("(-√4)").unwrap(), "0 4 √ -");
        assert_eq!(postfix("√-(4)").unwrap(), "0 4 - √");
    }

    #[test]
    fn test_dangling_unary_minus_rejected() {
        assert_eq!(postfix("5*-"), Err(EvaluationError::InvalidExpression));
        assert_eq!(postfix("-"), Err(EvaluationError::InvalidExpression));
        assert_eq!(postfix("(-)"), Err(EvaluationError::InvalidExpression));
        assert_eq!(postfix("--5"), Err(EvaluationError::InvalidExpression));
    }

    #[test]
    fn test_root_binds_to_group() {
        assert_eq!(postfix("√(9+7)").unwrap(), "9 7 + √");
        assert_eq!(postfix("√9+7").unwrap(), "9 √ 7 +");
        assert_eq!(postfix("√-4").unwrap(), "-4 √");
    }

    #[test]
    fn test_unbalanced_parentheses_rejected() {
        assert_eq!(postfix("(2+3"), Err(EvaluationError::InvalidExpression));
        assert_eq!(postfix("2+3)"), Err(EvaluationError::InvalidExpression));
    }
}
