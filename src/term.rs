use std::ops::Mul;

/// A single `coefficient * x^degree` monomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    degree: u32,
    coefficient: i64,
}

impl Term {
    pub const fn new(degree: u32, coefficient: i64) -> Self {
        Term {
            degree,
            coefficient,
        }
    }

    pub const fn constant(coefficient: i64) -> Self {
        Term::new(0, coefficient)
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    // Overflow wraps; magnitude limits are the parser's job.
    pub fn multiply(&self, other: &Term) -> Term {
        Term {
            degree: self.degree.wrapping_add(other.degree),
            coefficient: self.coefficient.wrapping_mul(other.coefficient),
        }
    }

    pub fn evaluate(&self, x: i64) -> i64 {
        self.coefficient.wrapping_mul(x.wrapping_pow(self.degree))
    }
}

impl Mul for Term {
    type Output = Term;
    fn mul(self, rhs: Term) -> Term {
        self.multiply(&rhs)
    }
}

impl From<(u32, i64)> for Term {
    fn from((degree, coefficient): (u32, i64)) -> Self {
        Term::new(degree, coefficient)
    }
}
