//! Pure string-level operations, with no cache involved.

use crate::error::Result;
use crate::format;
use crate::parser::{parse_canonical, parse_polynomial};
use crate::polynomial::Polynomial;

/// Parses `raw` and returns its canonical rendering.
pub fn parse_and_simplify(raw: &str) -> Result<String> {
    let polynomial = parse_polynomial(raw)?;
    Ok(format::format_canonical(&polynomial.simplify()))
}

/// Evaluates a raw or canonical polynomial string at `x`.
pub fn evaluate(polynomial: &str, x: i64) -> Result<i64> {
    Ok(parse_canonical(polynomial)?.evaluate(x))
}

pub fn format_canonical(polynomial: &Polynomial) -> String {
    format::format_canonical(polynomial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn simplify_scenario() {
        assert_eq!(
            parse_and_simplify("2*x^2 + 3*x - 5 + x^2 + x").unwrap(),
            "3*x^2 + 4*x - 5"
        );
    }

    #[test]
    fn evaluate_scenario() {
        assert_eq!(evaluate("3*x^2 + 4*x - 5", 2).unwrap(), 15);
        assert_eq!(evaluate("0", 12).unwrap(), 0);
    }

    #[test]
    fn unsupported_input() {
        let err = parse_and_simplify("abc").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnsupportedPolynomialType));
    }
}
