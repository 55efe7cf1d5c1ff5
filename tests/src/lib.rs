//! Integration and system tests for the reckon expression engine.
//!
//! The tests live under `tests/`; this library only hosts shared helpers.

use reckon_ast::TreeToken;

/// Renders a tree as an s-expression over lexemes, for compact structural
/// assertions across the test suite.
pub fn sexpr(node: &TreeToken) -> String {
    if node.children().is_empty() {
        return node.token().lexeme.clone();
    }
    let operands: Vec<String> = node.children().iter().map(sexpr).collect();
    format!("({} {})", node.token().lexeme, operands.join(" "))
}
