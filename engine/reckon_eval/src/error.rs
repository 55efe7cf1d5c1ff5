use thiserror::Error;

/// A well-formed tree asked for an operation arithmetic does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Right operand of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Right operand of `%` evaluated to zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// Factorial of a negative value.
    #[error("factorial of a negative number")]
    FactorialOfNegative,
    /// Factorial of a value with a fractional part.
    #[error("factorial of a non-integral number")]
    FactorialOfFraction,
    /// Factorial whose result cannot be represented.
    #[error("factorial operand too large")]
    FactorialTooLarge,
}

/// The tree's shape contradicts an operator's arity.
///
/// Defensive only: a correct parser never produces such a tree, so seeing
/// one of these means a bug upstream, not bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// An operator node carrying the wrong number of operands.
    #[error("operator '{symbol}' has {found} operands, expected {expected}")]
    WrongOperandCount {
        /// The operator's symbol
        symbol: &'static str,
        /// Operands its arity requires
        expected: usize,
        /// Operands actually attached
        found: usize,
    },
    /// A structural token (sentinel or bracket) inside a finished tree.
    #[error("'{symbol}' cannot appear in a finished expression tree")]
    UnexpectedToken {
        /// The offending token's symbol
        symbol: &'static str,
    },
}

/// Any failure the evaluator can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Undefined arithmetic on valid input
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// Internal invariant violation
    #[error(transparent)]
    Invariant(#[from] EvaluationError),
}
