use crate::{Notation, ParseError, ParseErrorKind, Span, parse};

fn prefix_err(input: &str) -> ParseError {
    parse(input, Notation::Prefix).unwrap_err()
}

fn postfix_err(input: &str) -> ParseError {
    parse(input, Notation::Postfix).unwrap_err()
}

#[test]
fn test_too_few_operands() {
    let err = prefix_err("(+ x)");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    match &err {
        ParseError::ArityMismatch {
            token,
            expected,
            found,
            ..
        } => {
            assert_eq!(token, "+");
            assert_eq!(*expected, 2);
            assert_eq!(*found, 1);
        }
        other => panic!("expected arity error, got {other:?}"),
    }
    assert_eq!(err.prefix(), "(+ x");
    assert_eq!(err.span(), Span::new(4, 5));
}

#[test]
fn test_too_many_operands() {
    let err = prefix_err("(+ x y z)");
    assert!(matches!(
        err,
        ParseError::ArityMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
    assert_eq!(err.pointer(), "(+ x y z\n        ^");
    assert_eq!(
        err.to_string(),
        "Operator '+' expects 2 operand(s), but got 3 at position 9"
    );
}

#[test]
fn test_unknown_operator() {
    let err = prefix_err("(% x y)");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(matches!(&err, ParseError::UnknownOperator { token, .. } if token == "%"));
    assert_eq!(err.prefix(), "(");
}

#[test]
fn test_unknown_operator_in_postfix() {
    let err = postfix_err("(x y %)");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(matches!(&err, ParseError::UnknownOperator { token, .. } if token == "%"));
    assert_eq!(err.prefix(), "(x y ");
    assert_eq!(err.to_string(), "Unexpected operator '%' at position 6");

    let err = postfix_err("((x y %) z *)");
    assert!(matches!(&err, ParseError::UnknownOperator { token, .. } if token == "%"));
    assert_eq!(err.prefix(), "((x y ");

    // Not followed by `)`, so it is still a bad operand
    let err = postfix_err("(x % y +)");
    assert_eq!(err.kind(), ParseErrorKind::InvalidToken);
    assert!(matches!(&err, ParseError::InvalidTerm { found, .. } if found == "%"));
}

#[test]
fn test_empty_brackets_have_no_operator() {
    assert!(matches!(
        prefix_err("()"),
        ParseError::UnknownOperator { ref token, .. } if token == ")"
    ));
    assert!(matches!(
        postfix_err("()"),
        ParseError::MissingOperator { ref found, .. } if found == ")"
    ));
}

#[test]
fn test_missing_close_bracket() {
    let err = prefix_err("(+ x y");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(matches!(&err, ParseError::ExpectedCloseBracket { found, .. } if found == "end of input"));
    assert_eq!(err.prefix(), "(+ x y");
    assert!(!err.span().is_valid());

    // Same failure in postfix is an invalid token
    let err = postfix_err("(x y +");
    assert_eq!(err.kind(), ParseErrorKind::InvalidToken);
    assert!(matches!(err, ParseError::ExpectedCloseBracket { .. }));
}

#[test]
fn test_postfix_operand_after_operator() {
    let err = postfix_err("(x y + z)");
    assert_eq!(err.kind(), ParseErrorKind::InvalidToken);
    assert!(matches!(&err, ParseError::ExpectedCloseBracket { found, .. } if found == "z"));
    assert_eq!(err.prefix(), "(x y + ");
}

#[test]
fn test_extra_tokens() {
    let err = prefix_err("(+ x y))");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(matches!(&err, ParseError::ExtraToken { found, .. } if found == ")"));
    assert_eq!(err.prefix(), "(+ x y)");

    assert!(matches!(prefix_err("x y"), ParseError::ExtraToken { .. }));
}

#[test]
fn test_invalid_terms() {
    let err = prefix_err("(+ x w)");
    assert_eq!(err.kind(), ParseErrorKind::InvalidToken);
    assert!(matches!(&err, ParseError::InvalidTerm { found, .. } if found == "w"));
    assert_eq!(err.prefix(), "(+ x ");
    assert_eq!(err.span(), Span::new(5, 6));

    // Operator tokens are not terms
    assert!(matches!(prefix_err("(+ + x)"), ParseError::InvalidTerm { .. }));
    assert!(matches!(prefix_err(")"), ParseError::InvalidTerm { .. }));
}

#[test]
fn test_empty_input() {
    for notation in [Notation::Infix, Notation::Prefix, Notation::Postfix] {
        let err = parse("   ", notation).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::InvalidToken);
        assert!(matches!(&err, ParseError::InvalidTerm { found, .. } if found == "end of input"));
    }
}

#[test]
fn test_postfix_wrong_arity_points_at_operator() {
    let err = postfix_err("(x y z +)");
    assert!(matches!(
        err,
        ParseError::ArityMismatch {
            expected: 2,
            found: 3,
            ..
        }
    ));
    assert_eq!(err.prefix(), "(x y z ");

    let err = postfix_err("((negate) x *)");
    assert!(matches!(
        &err,
        ParseError::ArityMismatch { token, expected: 1, found: 0, .. } if token == "negate"
    ));
}

#[test]
fn test_postfix_without_operator() {
    let err = postfix_err("(x y)");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert!(matches!(&err, ParseError::MissingOperator { found, .. } if found == ")"));
    assert_eq!(err.prefix(), "(x y");
}

#[test]
fn test_implicit_postfix_errors() {
    let err = parse("x +", Notation::Infix).unwrap_err();
    assert!(matches!(
        err,
        ParseError::ArityMismatch {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(err.prefix(), "x ");

    let err = parse("x y z +", Notation::Infix).unwrap_err();
    // The second stack entry is (+ y z), which started at `y`
    assert!(matches!(&err, ParseError::ExtraToken { found, .. } if found == "y"));
    assert_eq!(err.prefix(), "x ");

    let err = parse("x ( y", Notation::Infix).unwrap_err();
    assert!(matches!(&err, ParseError::InvalidTerm { found, .. } if found == "("));

    let err = parse("x q +", Notation::Infix).unwrap_err();
    assert!(matches!(&err, ParseError::InvalidTerm { found, .. } if found == "q"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        prefix_err("(% x y)").to_string(),
        "Unexpected operator '%' at position 2"
    );
    assert_eq!(
        prefix_err("(+ x y").to_string(),
        "Expected ')', but got 'end of input' at end of input (position 7)"
    );
    assert_eq!(
        prefix_err("(+ x y))").to_string(),
        "Expected end of input, but got extra token ')' at position 8"
    );
    assert_eq!(
        prefix_err("(+ x 1.2.3)").to_string(),
        "Expected number or variable, but got '1.2.3' at positions 6-10"
    );
}

#[test]
fn test_pointer_with_multibyte_prefix() {
    let err = prefix_err("(+ é x)");
    assert_eq!(err.pointer(), "(+ \n   ^");
}
