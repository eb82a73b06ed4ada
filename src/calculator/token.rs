//! Lexical tokens shared by the tokenizer, converter and evaluator.

use std::fmt;

/// Binary operators understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Percent,
}

impl Operator {
    /// Map a single character to its operator, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
            Self::Percent => '%',
        }
    }

    /// Binding strength used by the shunting-yard pop rule.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Percent => 3,
            Self::Power => 4,
        }
    }
}

/// Precedence of the unary square root. Higher than every binary operator.
pub const ROOT_PRECEDENCE: u8 = 5;

/// The square root symbol as typed by the user.
pub const ROOT_SYMBOL: char = '√';

/// A single lexical token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    /// A finite numeric literal. Unary minus may fold a sign into it.
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Unary square root.
    Root,
    /// Sign in front of a group or root. Only ever sits on the operator
    /// stack, and leaves it as a `-` applied to a preceding `0`.
    Negate,
}

impl Token {
    /// Whether a `-` following this token must be read as a sign.
    pub fn expects_operand(&self) -> bool {
        matches!(self, Self::Operator(_) | Self::LeftParen | Self::Root)
    }

    /// Precedence when the token sits on the operator stack.
    ///
    /// Parentheses never take part in precedence comparisons.
    pub fn stack_precedence(&self) -> Option<u8> {
        match self {
            Self::Operator(op) => Some(op.precedence()),
            Self::Root | Self::Negate => Some(ROOT_PRECEDENCE),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Root => write!(f, "{ROOT_SYMBOL}"),
            Self::Negate => f.write_str("neg"),
        }
    }
}

/// Render a token sequence space-separated, for log output.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
