use pretty_assertions::assert_eq;
use reckon_lexer::{tokenize, LexError, TokenType};

#[test]
fn test_stream_is_always_bounded_by_sentinels() {
    for input in ["", "1", "1+2", "((((", "!%^"] {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens.first().unwrap().token_type, TokenType::Start);
        assert_eq!(tokens.last().unwrap().token_type, TokenType::End);
    }
}

#[test]
fn test_token_round_trip_preserves_symbol_sequence() {
    let cases = ["1+2*3", "(1.5-2)/4", "-3^2", "10%3!", "2 +  3"];
    for input in cases {
        let rebuilt: String = tokenize(input)
            .unwrap()
            .iter()
            .map(|t| t.lexeme.as_str())
            .collect();
        let squeezed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, squeezed, "round trip failed for {input}");
    }
}

#[test]
fn test_tokenizing_twice_yields_identical_streams() {
    let first = tokenize("(1+2)*3").unwrap();
    let second = tokenize("(1+2)*3").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_lex_error_reports_offence() {
    let err = tokenize("2 ** $").unwrap_err();
    // The second '*' lexes fine on its own; '$' is the first offence
    match err {
        LexError::UnrecognizedInput { lexeme, location } => {
            assert_eq!(lexeme, "$");
            assert_eq!(location.column, 6);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
