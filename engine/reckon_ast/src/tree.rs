// Expression tree node for the reckon engine.
// The parser builds these in place; the evaluator walks them read-only.

use reckon_lexer::{Token, TokenType};

/// A node in a parsed expression tree: one token plus its operands in
/// left-to-right order (for binary operators, child 0 is the left operand).
///
/// The parser creates one childless `TreeToken` per input token, then
/// attaches children and marks nodes `processed` as it reduces the working
/// sequence. A processed node is a complete operand; the flag is parse-time
/// bookkeeping only and is not serialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeToken {
    token: Token,
    children: Vec<TreeToken>,
    #[cfg_attr(feature = "serde", serde(skip))]
    processed: bool,
}

impl TreeToken {
    /// Wraps a token in a childless, unprocessed node.
    pub fn new(token: Token) -> Self {
        Self {
            token,
            children: Vec::new(),
            processed: false,
        }
    }

    /// The token this node wraps.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Shorthand for the wrapped token's type.
    pub fn token_type(&self) -> TokenType {
        self.token.token_type
    }

    /// The node's operands, in left-to-right order.
    pub fn children(&self) -> &[TreeToken] {
        &self.children
    }

    /// Appends an operand.
    pub fn add_child(&mut self, child: TreeToken) {
        self.children.push(child);
    }

    /// Marks the node as fully reduced: it has acquired all required
    /// operands, or is a terminal that needs none.
    pub fn set_processed(&mut self) {
        self.processed = true;
    }

    /// Whether the node is a complete operand.
    pub fn is_processed(&self) -> bool {
        self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reckon_lexer::{Location, TokenType};

    fn tok(token_type: TokenType, lexeme: &str) -> Token {
        Token::new(token_type, lexeme, Location::default())
    }

    #[test]
    fn test_new_node_is_flat_and_unprocessed() {
        let node = TreeToken::new(tok(TokenType::Number(4.0), "4"));
        assert!(node.children().is_empty());
        assert!(!node.is_processed());
        assert_eq!(node.token_type(), TokenType::Number(4.0));
    }

    #[test]
    fn test_children_keep_operand_order() {
        let mut plus = TreeToken::new(tok(TokenType::Plus, "+"));
        plus.add_child(TreeToken::new(tok(TokenType::Number(1.0), "1")));
        plus.add_child(TreeToken::new(tok(TokenType::Number(2.0), "2")));
        plus.set_processed();

        assert!(plus.is_processed());
        assert_eq!(plus.children()[0].token_type(), TokenType::Number(1.0));
        assert_eq!(plus.children()[1].token_type(), TokenType::Number(2.0));
    }
}
