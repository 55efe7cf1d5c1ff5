use pretty_assertions::assert_eq;
use reckon_lexer::tokenize;
use reckon_parser::{parse, ParseError};
use tests::sexpr;

fn shape(input: &str) -> String {
    sexpr(&parse(tokenize(input).unwrap()).unwrap())
}

#[test]
fn test_standard_precedence_ladder() {
    // factorial > power > negation > multiplicative > additive
    assert_eq!(shape("1+2*3^2"), "(+ 1 (* 2 (^ 3 2)))");
    assert_eq!(shape("-2^2+1"), "(+ (- (^ 2 2)) 1)");
    assert_eq!(shape("2*3!+1"), "(+ (* 2 (! 3)) 1)");
}

#[test]
fn test_brackets_rebind_any_operator() {
    assert_eq!(shape("(1+2)*3"), "(* (+ 1 2) 3)");
    assert_eq!(shape("2^(1+1)"), "(^ 2 (+ 1 1))");
    assert_eq!(shape("(2*3)!"), "(! (* 2 3))");
}

#[test]
fn test_operand_order_is_left_to_right() {
    let tree = parse(tokenize("10-4").unwrap()).unwrap();
    assert_eq!(tree.children()[0].token().lexeme, "10");
    assert_eq!(tree.children()[1].token().lexeme, "4");
}

#[test]
fn test_root_of_valid_parse_is_processed() {
    for input in ["7", "1+2", "-(3)", "2^3^2"] {
        let tree = parse(tokenize(input).unwrap()).unwrap();
        assert!(tree.is_processed(), "unprocessed root for {input}");
    }
}

#[test]
fn test_structural_failures() {
    let cases: [(&str, fn(&ParseError) -> bool); 5] = [
        ("", |e| matches!(e, ParseError::EmptyExpression)),
        ("3 4", |e| matches!(e, ParseError::MissingOperator { .. })),
        ("(1+2", |e| matches!(e, ParseError::UnmatchedOpenBracket { .. })),
        ("1+2)", |e| matches!(e, ParseError::MismatchedCloseBracket { .. })),
        ("1+", |e| matches!(e, ParseError::MissingOperand { .. })),
    ];
    for (input, check) in cases {
        let err = parse(tokenize(input).unwrap()).unwrap_err();
        assert!(check(&err), "unexpected error for {input:?}: {err:?}");
    }
}

#[test]
fn test_parse_consumes_fresh_tokens_each_call() {
    let tokens = tokenize("1+2*3").unwrap();
    let first = sexpr(&parse(tokens.clone()).unwrap());
    let second = sexpr(&parse(tokens).unwrap());
    assert_eq!(first, second);
}
