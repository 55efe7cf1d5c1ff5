use pretty_assertions::assert_eq;
use reckon::{evaluate, evaluate_expression, CalcError};
use reckon_eval::{ArithmeticError, EvalError};

#[test]
fn test_reference_arithmetic() {
    // (input, value under standard precedence with left-to-right ties)
    let cases = [
        ("1+2*3", 7.0),
        ("(1+2)*3", 9.0),
        ("-3+5", 2.0),
        ("2^3^2", 64.0),
        ("8/2*4", 16.0),
        ("10-4-3", 3.0),
        ("1-2+3", 2.0),
        ("2*10%4", 0.0),
        ("5!/4!", 5.0),
        ("0.1+0.2", 0.1 + 0.2),
        ("2^-3", 0.125),
        ("-(2+3)*4", -20.0),
    ];
    for (input, expected) in cases {
        let got = evaluate(input).unwrap();
        assert!(
            (got - expected).abs() <= f64::EPSILON * expected.abs().max(1.0),
            "{input}: got {got}, expected {expected}"
        );
    }
}

#[test]
fn test_formatted_output() {
    assert_eq!(evaluate_expression("1+1", true).unwrap(), "1+1 = 2");
    assert_eq!(evaluate_expression("1+1", false).unwrap(), "2");
    assert_eq!(evaluate_expression("7/2", false).unwrap(), "3.5");
}

#[test]
fn test_failures_never_panic_and_keep_their_class() {
    let parse_failures = ["", "(1+2", "3 4", "1+", "@", "1.2.3"];
    for input in parse_failures {
        let message = evaluate_expression(input, false).unwrap_err();
        assert!(
            message.starts_with("Unable to parse expression: "),
            "{input:?} produced: {message}"
        );
    }

    let calc_failures = ["1/0", "5%0", "(0-4)!", "2.5!"];
    for input in calc_failures {
        let message = evaluate_expression(input, false).unwrap_err();
        assert!(
            message.starts_with("Unable to calculate expression: "),
            "{input:?} produced: {message}"
        );
    }
}

#[test]
fn test_typed_errors_survive_to_the_front_end() {
    assert_eq!(
        evaluate("171!").unwrap_err(),
        CalcError::Eval(EvalError::Arithmetic(ArithmeticError::FactorialTooLarge))
    );
    assert_eq!(
        evaluate("1/0").unwrap_err(),
        CalcError::Eval(EvalError::Arithmetic(ArithmeticError::DivisionByZero))
    );
}

#[test]
fn test_repeated_evaluation_is_stable() {
    for _ in 0..3 {
        assert_eq!(evaluate_expression("(1+2)*3", false).unwrap(), "9");
    }
}
