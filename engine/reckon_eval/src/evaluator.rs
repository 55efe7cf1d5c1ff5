//! Post-order evaluation of a parsed expression tree.

use log::debug;
use reckon_ast::TreeToken;
use reckon_lexer::TokenType;

use crate::error::{ArithmeticError, EvalError, EvaluationError};

/// Largest operand whose factorial still fits in an `f64` (171! overflows).
pub const MAX_FACTORIAL_OPERAND: f64 = 170.0;

/// Walks an expression tree and computes its numeric value.
///
/// Owns the tree it was given; the parser is done with it by then. Each
/// evaluation is independent, so evaluating twice returns the same result.
pub struct Evaluator {
    tree: TreeToken,
}

impl Evaluator {
    /// Creates an evaluator for a fully parsed tree.
    pub fn new(tree: TreeToken) -> Self {
        Self { tree }
    }

    /// Computes the tree's value.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        let result = evaluate_node(&self.tree)?;
        debug!("evaluated to {}", result);
        Ok(result)
    }
}

/// Evaluates one node: operands first, then the operator's semantics.
fn evaluate_node(node: &TreeToken) -> Result<f64, EvalError> {
    match node.token_type() {
        TokenType::Number(value) => {
            expect_operands(node, 0)?;
            Ok(value)
        }
        TokenType::Plus => {
            let (left, right) = binary_operands(node)?;
            Ok(left + right)
        }
        TokenType::Minus => match node.children() {
            // One operand is negation, two is subtraction; the parser
            // encodes the distinction purely in the child count.
            [operand] => Ok(-evaluate_node(operand)?),
            [left, right] => Ok(evaluate_node(left)? - evaluate_node(right)?),
            children => Err(EvaluationError::WrongOperandCount {
                symbol: node.token_type().symbol(),
                expected: 2,
                found: children.len(),
            }
            .into()),
        },
        TokenType::Star => {
            let (left, right) = binary_operands(node)?;
            Ok(left * right)
        }
        TokenType::Slash => {
            let (left, right) = binary_operands(node)?;
            if right == 0.0 {
                return Err(ArithmeticError::DivisionByZero.into());
            }
            Ok(left / right)
        }
        TokenType::Percent => {
            let (left, right) = binary_operands(node)?;
            if right == 0.0 {
                return Err(ArithmeticError::ModuloByZero.into());
            }
            Ok(left % right)
        }
        TokenType::Caret => {
            let (left, right) = binary_operands(node)?;
            Ok(left.powf(right))
        }
        TokenType::Bang => {
            let operand = unary_operand(node)?;
            Ok(factorial(operand)?)
        }
        TokenType::Start | TokenType::End | TokenType::BracketOpen | TokenType::BracketClose => {
            Err(EvaluationError::UnexpectedToken {
                symbol: node.token_type().symbol(),
            }
            .into())
        }
    }
}

fn expect_operands(node: &TreeToken, expected: usize) -> Result<(), EvaluationError> {
    let found = node.children().len();
    if found != expected {
        return Err(EvaluationError::WrongOperandCount {
            symbol: node.token_type().symbol(),
            expected,
            found,
        });
    }
    Ok(())
}

fn unary_operand(node: &TreeToken) -> Result<f64, EvalError> {
    expect_operands(node, 1)?;
    evaluate_node(&node.children()[0])
}

fn binary_operands(node: &TreeToken) -> Result<(f64, f64), EvalError> {
    expect_operands(node, 2)?;
    let left = evaluate_node(&node.children()[0])?;
    let right = evaluate_node(&node.children()[1])?;
    Ok((left, right))
}

/// Factorial over `f64`: requires a non-negative integral operand small
/// enough for the result to be representable.
fn factorial(operand: f64) -> Result<f64, ArithmeticError> {
    if operand < 0.0 {
        return Err(ArithmeticError::FactorialOfNegative);
    }
    if operand.fract() != 0.0 {
        return Err(ArithmeticError::FactorialOfFraction);
    }
    if operand > MAX_FACTORIAL_OPERAND {
        return Err(ArithmeticError::FactorialTooLarge);
    }

    let mut result = 1.0;
    for k in 2..=operand as u64 {
        result *= k as f64;
    }
    Ok(result)
}
