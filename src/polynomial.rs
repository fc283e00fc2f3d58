use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use num_traits::One;

use crate::term::Term;

/// An ordered sequence of terms in one variable.
///
/// Freshly parsed polynomials may repeat degrees. Everything returned by
/// [`Polynomial::simplify`] or [`Polynomial::multiply`] is canonical: one term
/// per degree, strictly descending degrees, no zero coefficients. The empty
/// sequence is the zero polynomial.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Builds a polynomial as given, dropping zero-coefficient terms.
    pub fn new(terms: Vec<Term>) -> Self {
        let terms = terms.into_iter().filter(|t| !t.is_zero()).collect();
        Polynomial { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_canonical(&self) -> bool {
        self.terms.iter().all(|t| !t.is_zero())
            && self
                .terms
                .windows(2)
                .all(|pair| pair[0].degree() > pair[1].degree())
    }

    pub fn simplify(&self) -> Polynomial {
        collect_by_degree(self.terms.iter().copied())
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        collect_by_degree(
            self.terms
                .iter()
                .flat_map(|a| other.terms.iter().map(move |b| a.multiply(b))),
        )
    }

    /// Sums every term at `x`; duplicate degrees need no simplification first.
    pub fn evaluate(&self, x: i64) -> i64 {
        self.terms
            .iter()
            .fold(0i64, |acc, term| acc.wrapping_add(term.evaluate(x)))
    }
}

// Groups by degree with a wrapping sum, then lays the groups out highest first.
fn collect_by_degree<I: IntoIterator<Item = Term>>(terms: I) -> Polynomial {
    let mut coeffs: BTreeMap<u32, i64> = BTreeMap::new();
    for term in terms {
        match coeffs.entry(term.degree()) {
            Entry::Vacant(entry) => {
                entry.insert(term.coefficient());
            }
            Entry::Occupied(mut entry) => {
                let updated = entry.get().wrapping_add(term.coefficient());
                *entry.get_mut() = updated;
            }
        }
    }
    Polynomial::new(
        coeffs
            .into_iter()
            .rev()
            .map(|(degree, coeff)| Term::new(degree, coeff))
            .collect(),
    )
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Polynomial::new(terms)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Polynomial {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.multiply(&rhs)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial {
            terms: vec![Term::constant(1)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(terms: &[(u32, i64)]) -> Polynomial {
        terms.iter().copied().map(Term::from).collect()
    }

    #[test]
    fn construction_drops_zero_terms() {
        let p = poly(&[(3, 0), (1, 4), (0, 0)]);
        assert_eq!(p.terms(), &[Term::new(1, 4)]);
    }

    #[test]
    fn simplify_groups_and_orders() {
        let p = poly(&[(2, 2), (1, 3), (0, -5), (2, 1), (1, 1)]);
        assert_eq!(p.simplify(), poly(&[(2, 3), (1, 4), (0, -5)]));
    }

    #[test]
    fn simplify_cancels_to_zero() {
        let p = poly(&[(1, 1), (1, -1)]);
        assert!(p.simplify().is_empty());
        assert_eq!(p.simplify(), Polynomial::default());
    }

    #[test]
    fn multiply_is_canonical() {
        let a = poly(&[(1, 1), (0, 2)]);
        let b = poly(&[(1, 1), (0, -1)]);
        let product = a.multiply(&b);
        assert_eq!(product, poly(&[(2, 1), (1, 1), (0, -2)]));
        assert!(product.is_canonical());
    }

    #[test]
    fn multiply_by_zero_is_zero() {
        let a = poly(&[(1, 1), (0, 2)]);
        assert!(a.multiply(&Polynomial::default()).is_empty());
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let p = poly(&[(0, 4), (3, -1), (0, 1)]);
        assert_eq!(p.multiply(&Polynomial::one()), p.simplify());
    }

    #[test]
    fn evaluate_handles_duplicate_degrees() {
        let raw = poly(&[(2, 2), (1, 3), (0, -5), (2, 1), (1, 1)]);
        assert_eq!(raw.evaluate(2), 15);
        assert_eq!(raw.simplify().evaluate(2), 15);
    }

    #[test]
    fn evaluate_is_exact_for_large_powers() {
        let p = poly(&[(13, 1)]);
        assert_eq!(p.evaluate(7), 96_889_010_407);
    }

    #[test]
    fn mul_operator_folds_like_multiply() {
        let a = poly(&[(1, 1), (0, 1)]);
        let product = a.clone() * a.clone() * Polynomial::one();
        assert_eq!(product, a.multiply(&a));
    }
}
