use std::fmt;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Renders a canonical polynomial, e.g. `-x^3 + 4*x - 5`.
///
/// Terms are written in the order given. The zero polynomial renders as `0`.
pub fn format_canonical(polynomial: &Polynomial) -> String {
    if polynomial.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (idx, term) in polynomial.iter().enumerate() {
        let positive = term.coefficient() > 0;
        match (idx, positive) {
            (0, true) => {}
            (0, false) => out.push('-'),
            (_, true) => out.push_str(" + "),
            (_, false) => out.push_str(" - "),
        }
        write_unsigned_term(&mut out, term);
    }
    out
}

fn write_unsigned_term(out: &mut String, term: &Term) {
    let magnitude = term.coefficient().unsigned_abs();
    let degree = term.degree();
    if magnitude != 1 || degree == 0 {
        out.push_str(&magnitude.to_string());
        if degree != 0 {
            out.push('*');
        }
    }
    if degree != 0 {
        out.push('x');
        if degree != 1 {
            out.push('^');
            out.push_str(&degree.to_string());
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_canonical(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(terms: &[(u32, i64)]) -> Polynomial {
        terms.iter().copied().map(Term::from).collect()
    }

    #[test]
    fn leading_plus_is_dropped() {
        assert_eq!(format_canonical(&poly(&[(2, 3), (1, 4), (0, -5)])), "3*x^2 + 4*x - 5");
    }

    #[test]
    fn leading_minus_hugs_term() {
        assert_eq!(format_canonical(&poly(&[(1, -1)])), "-x");
        assert_eq!(format_canonical(&poly(&[(3, -2), (0, 1)])), "-2*x^3 + 1");
    }

    #[test]
    fn unit_coefficients() {
        assert_eq!(format_canonical(&poly(&[(2, 1), (1, 1), (0, -2)])), "x^2 + x - 2");
        assert_eq!(format_canonical(&poly(&[(0, -1)])), "-1");
        assert_eq!(format_canonical(&poly(&[(0, 1)])), "1");
        assert_eq!(format_canonical(&poly(&[(5, 1), (1, -1)])), "x^5 - x");
    }

    #[test]
    fn zero_polynomial() {
        assert_eq!(format_canonical(&Polynomial::default()), "0");
    }

    #[test]
    fn most_negative_coefficient() {
        let rendered = format_canonical(&poly(&[(1, i64::MIN)]));
        assert_eq!(rendered, format!("-{}*x", i64::MIN.unsigned_abs()));
    }

    #[test]
    fn display_matches_canonical() {
        let p = poly(&[(4, 7), (0, 9)]);
        assert_eq!(p.to_string(), "7*x^4 + 9");
    }
}
