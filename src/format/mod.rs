//! Rendering polynomials back to the accepted input grammar.

pub mod polynomial;

pub use polynomial::format_canonical;
