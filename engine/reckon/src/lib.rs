//! Calculator front-end for the reckon expression engine.
//!
//! Ties the pipeline together — text to tokens to tree to number — and
//! exposes the one operation callers need: [`evaluate_expression`].

use reckon_ast::TreeToken;
use reckon_eval::{EvalError, Evaluator};
use reckon_lexer::{tokenize, LexError};
use reckon_parser::{parse, ParseError};
use thiserror::Error;

/// Any failure the pipeline can produce for an input expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The input could not be tokenized
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream had no valid structure
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// True when the failure happened before a tree value existed, i.e. the
    /// expression itself was unparsable rather than uncalculable.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, CalcError::Lex(_) | CalcError::Parse(_))
    }
}

/// Evaluates an expression to its numeric value.
pub fn evaluate(text: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(text)?;
    let tree = parse(tokens)?;
    Ok(Evaluator::new(tree).evaluate()?)
}

/// Parses an expression without evaluating it.
pub fn parse_tree(text: &str) -> Result<TreeToken, CalcError> {
    Ok(parse(tokenize(text)?)?)
}

/// Evaluates an expression and formats the outcome for display.
///
/// On success the result is the formatted number, prefixed with
/// `"<text> = "` when `show_expression` is set. On failure the message
/// distinguishes expressions that would not parse from expressions that
/// would not calculate.
pub fn evaluate_expression(text: &str, show_expression: bool) -> Result<String, String> {
    match evaluate(text) {
        Ok(result) if show_expression => Ok(format!("{} = {}", text, result)),
        Ok(result) => Ok(result.to_string()),
        Err(err) if err.is_parse_failure() => Err(format!("Unable to parse expression: {}", err)),
        Err(err) => Err(format!("Unable to calculate expression: {}", err)),
    }
}
