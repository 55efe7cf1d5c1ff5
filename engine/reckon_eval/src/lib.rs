//! Evaluation for the reckon expression engine.
//!
//! Walks a parsed expression tree bottom-up and computes its `f64` value,
//! surfacing undefined arithmetic as typed errors instead of panics.

pub mod error;
pub mod evaluator;

pub use error::{ArithmeticError, EvalError, EvaluationError};
pub use evaluator::{Evaluator, MAX_FACTORIAL_OPERAND};
