//! Canonicalization of raw user input before tokenization.
//!
//! Rewrites, in order:
//! 1. strip whitespace
//! 2. `A<op>B%` into `A<op>(A*B/100)` (percent of the first operand)
//! 3. bare `N%` into `(N/100)`
//! 4. implicit multiplication before `(` and `√`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A number, a binary operator, a second number, then `%`.
    static ref PERCENT_OF: Regex = Regex::new(
        r"([0-9]+(?:\.[0-9]+)?)([-+*/])([0-9]+(?:\.[0-9]+)?)%"
    ).unwrap();

    /// A lone number followed by `%`.
    static ref BARE_PERCENT: Regex = Regex::new(
        r"([0-9]+(?:\.[0-9]+)?)%"
    ).unwrap();

    /// A digit or closing paren directly followed by `(` or `√`.
    static ref IMPLICIT_MULTIPLY: Regex = Regex::new(
        r"([0-9)])([(√])"
    ).unwrap();
}

/// Rewrite a raw expression into a token-ready string.
///
/// Empty input is returned unchanged.
pub fn preprocess(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return compact;
    }

    let expanded = PERCENT_OF.replace_all(&compact, "${1}${2}(${1}*${3}/100)");
    let expanded = BARE_PERCENT.replace_all(&expanded, "(${1}/100)");

    IMPLICIT_MULTIPLY
        .replace_all(&expanded, "${1}*${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_removed() {
        assert_eq!(preprocess(" 1 +\t2 "), "1+2");
        assert_eq!(preprocess("   "), "");
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn test_percent_of_first_operand() {
        assert_eq!(preprocess("200+10%"), "200+(200*10/100)");
        assert_eq!(preprocess("80 - 25%"), "80-(80*25/100)");
        assert_eq!(preprocess("1.5*2.5%"), "1.5*(1.5*2.5/100)");
    }

    #[test]
    fn test_bare_percent() {
        assert_eq!(preprocess("50%"), "(50/100)");
        assert_eq!(preprocess("(50%)"), "((50/100))");
        assert_eq!(preprocess("2^10%"), "2^(10/100)");
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(preprocess("2(3+1)"), "2*(3+1)");
        assert_eq!(preprocess("3√4"), "3*√4");
        assert_eq!(preprocess("(1)(2)"), "(1)*(2)");
        assert_eq!(preprocess("(2)√9"), "(2)*√9");
    }

    #[test]
    fn test_percent_then_implicit_multiplication() {
        assert_eq!(preprocess("10%(5)"), "(10/100)*(5)");
    }

    #[test]
    fn test_plain_expression_untouched() {
        assert_eq!(preprocess("2+3*4"), "2+3*4");
        assert_eq!(preprocess("√(2^2)"), "√(2^2)");
    }
}
