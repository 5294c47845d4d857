use quorum_parse::{parse_expr, ParseError};

#[test]
fn trailing_garbage_is_rejected() {
    let err = parse_expr("RoundRobinPolicy() extra").unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
    assert!(err.to_string().contains("trailing input"));
}

#[test]
fn missing_close_paren() {
    let err = parse_expr("TokenAwarePolicy(RoundRobinPolicy()").unwrap_err();
    assert!(err.to_string().contains("expected `)`"));
}

#[test]
fn empty_input_is_malformed() {
    let err = parse_expr("").unwrap_err();
    assert!(err.to_string().contains("expected policy name"));
}

#[test]
fn long_marker_rejects_fractional_literal() {
    let err = parse_expr("P((long) 10.5)").unwrap_err();
    let ParseError::BadNumber {
        literal, target, ..
    } = err
    else {
        panic!("expected BadNumber");
    };
    assert_eq!(literal, "10.5");
    assert_eq!(target, "long");
}

#[test]
fn int_overflow_is_a_numeric_error() {
    let err = parse_expr("P(99999999999)").unwrap_err();
    assert!(matches!(err, ParseError::BadNumber { target: "int", .. }));
}

#[test]
fn bare_identifier_argument_fails_numeric_coercion() {
    // unquoted, unparenthesized fragments default to int
    let err = parse_expr("DCAwareRoundRobinPolicy(dc1)").unwrap_err();
    let ParseError::BadNumber {
        literal, target, ..
    } = err
    else {
        panic!("expected BadNumber");
    };
    assert_eq!(literal, "dc1");
    assert_eq!(target, "int");
}

#[test]
fn non_numeric_text_after_marker_fails_as_that_kind() {
    let err = parse_expr("P((long) abc)").unwrap_err();
    assert!(matches!(err, ParseError::BadNumber { target: "long", .. }));
}

#[test]
fn unterminated_string_is_malformed() {
    let err = parse_expr("DCAwareRoundRobinPolicy('dc1").unwrap_err();
    assert!(err.to_string().contains("unterminated string"));
}

#[test]
fn unknown_type_marker_is_malformed() {
    let err = parse_expr("P((short) 1)").unwrap_err();
    assert!(err.to_string().contains("unknown type marker"));
}

#[test]
fn string_after_marker_is_malformed() {
    let err = parse_expr("P((long) '5')").unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
}

#[test]
fn unexpected_character_is_malformed() {
    let err = parse_expr("P(@)").unwrap_err();
    assert!(err.to_string().contains("unexpected character"));
}

#[test]
fn dangling_comma_is_malformed() {
    let err = parse_expr("P(1,)").unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
}
