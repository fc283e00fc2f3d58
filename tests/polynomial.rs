use polyproc::{Polynomial, Term, format_canonical, parse_polynomial};

fn poly(input: &str) -> Polynomial {
    parse_polynomial(input).expect("parse polynomial")
}

fn terms(p: &Polynomial) -> Vec<(u32, i64)> {
    p.iter().map(|t| (t.degree(), t.coefficient())).collect()
}

#[test]
fn simplify_aggregates_by_degree() {
    let simplified = poly("2*x^2 + 3*x - 5 + x^2 + x").simplify();
    assert_eq!(terms(&simplified), vec![(2, 3), (1, 4), (0, -5)]);
    assert_eq!(format_canonical(&simplified), "3*x^2 + 4*x - 5");
}

#[test]
fn product_of_sums_is_canonical() {
    let product = poly("(x +2)*(x- 1)");
    assert_eq!(terms(&product), vec![(2, 1), (1, 1), (0, -2)]);
    assert!(product.is_canonical());
    assert_eq!(format_canonical(&product), "x^2 + x - 2");
}

#[test]
fn three_factor_product() {
    let product = poly("(x-1)*(x+1)*(x^2+1)");
    assert_eq!(format_canonical(&product), "x^4 - 1");
}

#[test]
fn single_negated_variable() {
    assert_eq!(poly("-x").terms(), &[Term::new(1, -1)]);
}

#[test]
fn parsed_form_keeps_duplicates_until_simplified() {
    let parsed = poly("x + x + 3");
    assert_eq!(parsed.len(), 3);
    assert!(!parsed.is_canonical());
    assert_eq!(format_canonical(&parsed.simplify()), "2*x + 3");
}

#[test]
fn cancellation_renders_zero() {
    let simplified = poly("x - x").simplify();
    assert!(simplified.is_empty());
    assert_eq!(format_canonical(&simplified), "0");
}

#[test]
fn evaluate_scenario() {
    assert_eq!(poly("3*x^2 + 4*x - 5").evaluate(2), 15);
    assert_eq!(poly("(x+2)*(x-1)").evaluate(-3), 4);
    assert_eq!(poly("-x^3").evaluate(-2), 8);
}

#[test]
fn evaluate_wraps_instead_of_panicking() {
    let p = poly("x^64");
    assert_eq!(p.evaluate(2), 2i64.wrapping_pow(64));
}
