//! Grammar validation, term tokenizing and polynomial parsing.
//!
//! Two input shapes are accepted once whitespace is removed: a flat sum of
//! signed terms (`3*x^2 - x + 7`) and a product of parenthesized sums
//! (`(x+2)*(x-1)`). Every term is `[sign][coeff*]x[^degree]` or a signed
//! constant. Coefficients and degrees are at most nine digits.

use nom::IResult;
use nom::bytes::complete::{take_till, take_while, take_while1, take_while_m_n};
use nom::character::complete::{char, one_of, satisfy};
use nom::combinator::{all_consuming, opt, recognize};
use nom::error::VerboseError;
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, tuple};
use num_traits::One;
use tracing::{debug, info, warn};

use crate::error::{ErrorKind, Failure, PolyError, Result};
use crate::polynomial::Polynomial;
use crate::term::Term;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Structural shape of a whitespace-free polynomial string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape<'a> {
    Simple(&'a str),
    Complex(Vec<&'a str>),
}

pub fn parse_polynomial(input: &str) -> Result<Polynomial> {
    info!(polynomial = input, "parsing polynomial");
    let stripped = strip_whitespace(input);
    let parsed = match classify(&stripped) {
        Ok(Shape::Simple(body)) => parse_simple(body),
        Ok(Shape::Complex(factors)) => parse_complex(&factors),
        Err(err) => Err(err),
    };
    parsed.map_err(|err| err.with_raw(input))
}

/// Like [`parse_polynomial`], but also accepts `0`, the rendering of the
/// zero polynomial.
pub fn parse_canonical(input: &str) -> Result<Polynomial> {
    if input.trim() == "0" {
        return Ok(Polynomial::default());
    }
    parse_polynomial(input)
}

/// Parses a standalone x value: optional `-` and one to nine digits.
pub fn parse_x(input: &str) -> Result<i64> {
    info!(x = input, "parsing x");
    let literal: ParseResult<'_, &str> = all_consuming(recognize(pair(
        opt(char('-')),
        take_while_m_n(1, 9, is_digit),
    )))(input);
    match literal {
        Ok((_, digits)) => digits
            .parse::<i64>()
            .map_err(|_| PolyError::X(Failure::new(ErrorKind::UnsupportedXType))),
        Err(_) => {
            warn!(x = input, "unsupported x");
            Err(PolyError::X(Failure::new(ErrorKind::UnsupportedXType)))
        }
    }
}

/// Decides which grammar shape a whitespace-free string has.
///
/// The simple shape is only a charset check; term structure is enforced
/// later by [`parse_term`].
pub fn classify(input: &str) -> Result<Shape<'_>> {
    if let Ok((_, body)) = all_consuming(simple_body)(input) {
        return Ok(Shape::Simple(body));
    }
    if let Ok((_, factors)) = all_consuming(product)(input) {
        return Ok(Shape::Complex(factors));
    }
    warn!(polynomial = input, "unsupported polynomial type");
    Err(PolyError::polynomial(Failure::new(
        ErrorKind::UnsupportedPolynomialType,
    )))
}

/// Parses a flat signed-term sum. The result is not simplified.
pub fn parse_simple(body: &str) -> Result<Polynomial> {
    debug!(body, "parsing simple polynomial");
    let signed = with_silent_sign(body);
    let terms = split_terms(&signed)
        .into_iter()
        .map(parse_term)
        .collect::<Result<Vec<_>>>()?;
    Ok(Polynomial::new(terms))
}

fn parse_complex(factors: &[&str]) -> Result<Polynomial> {
    debug!(factors = factors.len(), "parsing complex polynomial");
    factors.iter().try_fold(Polynomial::one(), |acc, factor| {
        Ok(acc.multiply(&parse_simple(factor)?))
    })
}

/// Splits a signed body into runs that each start with `+` or `-`.
pub fn split_terms(signed: &str) -> Vec<&str> {
    many0(signed_run)(signed)
        .map(|(_, runs)| runs)
        .unwrap_or_default()
}

/// Parses one signed term such as `-3*x^2`, `+x`, or `+12`.
pub fn parse_term(term: &str) -> Result<Term> {
    debug!(term, "parsing term");
    let Some(x_at) = term.find('x') else {
        return parse_coefficient(term).map(Term::constant);
    };

    if x_at == 1 {
        let coefficient = if term.starts_with('-') { -1 } else { 1 };
        if term.len() == 2 {
            return Ok(Term::new(1, coefficient));
        }
        let degree = parse_degree(term, x_at)?;
        return Ok(Term::new(degree, coefficient));
    }

    if x_at == term.len() - 1 {
        let coefficient = parse_coefficient_before(term, x_at)?;
        return Ok(Term::new(1, coefficient));
    }

    let degree = parse_degree(term, x_at)?;
    let coefficient = parse_coefficient_before(term, x_at)?;
    Ok(Term::new(degree, coefficient))
}

fn parse_coefficient(literal: &str) -> Result<i64> {
    let parsed: ParseResult<'_, &str> = all_consuming(recognize(tuple((
        one_of("+-"),
        satisfy(|c| c.is_ascii_digit() && c != '0'),
        take_while_m_n(0, 8, is_digit),
    ))))(literal);
    match parsed.map(|(_, digits)| digits.parse::<i64>()) {
        Ok(Ok(value)) => Ok(value),
        _ => Err(term_failure(ErrorKind::ImpossibleToParseCoefficient, literal)),
    }
}

// `*` must sit right before `x`; what precedes it is a signed coefficient.
fn parse_coefficient_before(term: &str, x_at: usize) -> Result<i64> {
    match term[..x_at].strip_suffix('*') {
        Some(literal) => parse_coefficient(literal),
        None => Err(term_failure(ErrorKind::IncorrectMultiplySignPosition, term)),
    }
}

// `^` must sit right after `x`; what follows it is the degree.
fn parse_degree(term: &str, x_at: usize) -> Result<u32> {
    let Some(digits) = term[x_at + 1..].strip_prefix('^') else {
        return Err(term_failure(ErrorKind::IncorrectDegreeSignPosition, term));
    };
    let parsed: ParseResult<'_, &str> = all_consuming(take_while_m_n(1, 9, is_digit))(digits);
    match parsed.map(|(_, digits)| digits.parse::<u32>()) {
        Ok(Ok(degree)) => Ok(degree),
        _ => Err(term_failure(ErrorKind::ImpossibleToParseDegree, term)),
    }
}

fn term_failure(kind: ErrorKind, term: &str) -> PolyError {
    warn!(term, code = kind.code(), "term rejected");
    PolyError::polynomial(Failure::with_parameter(kind, term))
}

fn with_silent_sign(body: &str) -> String {
    if body.starts_with('-') {
        body.to_string()
    } else {
        format!("+{body}")
    }
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_body_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'x' | '-' | '+' | '*' | '^')
}

fn simple_body(input: &str) -> ParseResult<'_, &str> {
    take_while1(is_body_char)(input)
}

fn factor(input: &str) -> ParseResult<'_, &str> {
    delimited(char('('), take_while(is_body_char), char(')'))(input)
}

fn product(input: &str) -> ParseResult<'_, Vec<&str>> {
    separated_list1(char('*'), factor)(input)
}

fn signed_run(input: &str) -> ParseResult<'_, &str> {
    recognize(pair(one_of("+-"), take_till(|c: char| c == '+' || c == '-')))(input)
}
