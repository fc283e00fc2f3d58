use polyproc::{ErrorKind, PolyError, parse_polynomial, parse_x};

fn failure_of(input: &str) -> (ErrorKind, Vec<String>) {
    match parse_polynomial(input) {
        Err(PolyError::Polynomial { failure, raw }) => {
            assert_eq!(raw.as_deref(), Some(input), "raw request must be attached");
            (failure.kind, failure.parameters)
        }
        other => panic!("expected polynomial failure for {input}, got {other:?}"),
    }
}

#[test]
fn missing_multiply_sign_reports_signed_term() {
    assert_eq!(
        failure_of("2x"),
        (ErrorKind::IncorrectMultiplySignPosition, vec!["+2x".to_string()])
    );
}

#[test]
fn unsupported_shapes() {
    for input in ["abc", "2*y", "(x+1)(x+2)", "[x]", "x/2", ""] {
        assert_eq!(failure_of(input).0, ErrorKind::UnsupportedPolynomialType, "{input}");
    }
}

#[test]
fn term_errors_carry_the_term() {
    let cases = [
        ("3*x^2 - 07", ErrorKind::ImpossibleToParseCoefficient, "-07"),
        ("x^2 + 5x", ErrorKind::IncorrectMultiplySignPosition, "+5x"),
        ("x^a", ErrorKind::UnsupportedPolynomialType, ""),
        ("x2 + 1", ErrorKind::IncorrectDegreeSignPosition, "+x2"),
        ("1 + x^", ErrorKind::ImpossibleToParseDegree, "+x^"),
        ("(x+1)*(2x)", ErrorKind::IncorrectMultiplySignPosition, "+2x"),
        ("x^2*x", ErrorKind::ImpossibleToParseDegree, "+x^2*x"),
    ];
    for (input, kind, term) in cases {
        let (actual_kind, params) = failure_of(input);
        assert_eq!(actual_kind, kind, "{input}");
        if !term.is_empty() {
            assert_eq!(params, vec![term.to_string()], "{input}");
        }
    }
}

#[test]
fn whitespace_is_ignored() {
    let spaced = parse_polynomial(" ( x + 2 ) * ( x - 1 ) ").unwrap();
    let tight = parse_polynomial("(x+2)*(x-1)").unwrap();
    assert_eq!(spaced, tight);
    let tabbed = parse_polynomial("3 *\tx ^ 2\n- 1").unwrap();
    assert_eq!(tabbed.simplify(), parse_polynomial("3*x^2-1").unwrap());
}

#[test]
fn x_values() {
    assert_eq!(parse_x("0").unwrap(), 0);
    assert_eq!(parse_x("-17").unwrap(), -17);
    let err = parse_x("abc").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UnsupportedXType));
}
