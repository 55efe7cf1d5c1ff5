use reckon_lexer::Location;
use thiserror::Error;

/// A structural error found while parsing a token stream.
///
/// Always fatal to the current evaluation; each variant carries enough
/// position information for a useful one-line message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Nothing to parse: no tokens between the sentinels, or an empty
    /// bracket pair.
    #[error("empty expression")]
    EmptyExpression,

    /// A `)` with no unconsumed `(` anywhere to its left.
    #[error("closing bracket at column {} has no matching opening bracket", .location.column)]
    MismatchedCloseBracket {
        /// Where the stray bracket sits
        location: Location,
    },

    /// A `(` that is never closed.
    #[error("opening bracket at column {} is never closed", .location.column)]
    UnmatchedOpenBracket {
        /// Where the unclosed bracket sits
        location: Location,
    },

    /// An operator left without a required operand, such as `1+` or `!3`.
    #[error("operator '{symbol}' at column {} is missing an operand", .location.column)]
    MissingOperand {
        /// The operator's symbol
        symbol: &'static str,
        /// Where the operator sits
        location: Location,
    },

    /// Two adjacent operands with nothing joining them, such as `3 4`.
    #[error("expected an operator before column {}", .location.column)]
    MissingOperator {
        /// Where the second operand starts
        location: Location,
    },

    /// Resource limit: bracket nesting beyond the parser's recursion budget.
    #[error("brackets nested deeper than {limit} levels")]
    BracketDepthExceeded {
        /// The configured nesting limit
        limit: usize,
    },

    /// Resource limit: more tokens than the parser accepts in one
    /// expression.
    #[error("expression longer than {limit} tokens")]
    ExpressionTooLong {
        /// The configured token budget
        limit: usize,
    },
}
