//! Operator-precedence reduction parser.
//!
//! Takes the lexer's token stream and repeatedly collapses the
//! highest-precedence unreduced token together with its adjacent operands
//! until a single expression tree remains. There is no grammar and no
//! backtracking: a static precedence ordering decides what reduces next,
//! and bracketed spans are cut out and parsed recursively.

mod error;

pub use error::ParseError;

use lazy_static::lazy_static;
use log::{debug, trace};
use reckon_ast::TreeToken;
use reckon_lexer::{Arity, Fixity, Token, TokenType};

/// Recursion budget for bracket resolution. The collected span between a
/// close bracket and its matching open bracket never contains bracket
/// tokens (the leftmost close bracket always closes an innermost group),
/// so resolution recurses at most one level; the limit is a backstop in
/// case that invariant is ever broken.
pub const MAX_BRACKET_DEPTH: usize = 64;

/// Most tokens (sentinels included) accepted in one expression. Bounds the
/// tree depth the evaluator can be asked to recurse through.
pub const MAX_TOKENS: usize = 4096;

lazy_static! {
    /// Distinct precedence levels in descending order, consulted on every
    /// reduction round. Built once from the closed token-type enumeration
    /// plus the contextual negation level of the minus token.
    static ref PRECEDENCE_LEVELS: Vec<u8> = {
        let mut levels: Vec<u8> = TokenType::ALL
            .iter()
            .map(|t| t.precedence())
            .chain(std::iter::once(TokenType::NEGATION_PRECEDENCE))
            .collect();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();
        levels
    };
}

/// Parses a token stream (as produced by [`reckon_lexer::tokenize`], hidden
/// sentinels included) into a single expression tree.
pub fn parse(tokens: Vec<Token>) -> Result<TreeToken, ParseError> {
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::ExpressionTooLong { limit: MAX_TOKENS });
    }
    debug!("parsing {} tokens", tokens.len());

    let nodes: Vec<TreeToken> = tokens.into_iter().map(TreeToken::new).collect();
    let root = parse_sequence(nodes, 0)?;

    if !root.is_processed() {
        // Only degenerate input leaves an unreduced root: bare sentinels
        // (nothing between them) or a lone operand-less operator.
        return Err(match root.token_type().arity() {
            Arity::Hidden => ParseError::EmptyExpression,
            _ => ParseError::MissingOperand {
                symbol: root.token_type().symbol(),
                location: root.token().location,
            },
        });
    }
    Ok(root)
}

/// Reduces a working sequence to a single node.
///
/// Invariant: read left to right the sequence is always a valid, possibly
/// partially reduced expression; every round shrinks it or marks a node
/// processed, and a round that can do neither is a structural error.
fn parse_sequence(mut nodes: Vec<TreeToken>, depth: usize) -> Result<TreeToken, ParseError> {
    if depth > MAX_BRACKET_DEPTH {
        return Err(ParseError::BracketDepthExceeded {
            limit: MAX_BRACKET_DEPTH,
        });
    }

    while nodes.len() > 1 {
        if !reduce_once(&mut nodes, depth)? {
            return Err(diagnose_stuck(&nodes));
        }
    }
    nodes.pop().ok_or(ParseError::EmptyExpression)
}

/// Performs exactly one reduction: the leftmost eligible occurrence at the
/// highest outstanding precedence level. Returns false when nothing is
/// eligible.
fn reduce_once(nodes: &mut Vec<TreeToken>, depth: usize) -> Result<bool, ParseError> {
    let bracket_level = TokenType::BracketOpen.precedence();

    for &level in PRECEDENCE_LEVELS.iter() {
        if level == bracket_level {
            if reduce_bracket(nodes, depth)? {
                return Ok(true);
            }
            continue;
        }

        if let Some(offset) = find_reducible(nodes, level) {
            apply(nodes, offset);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Retrieves the offset of the leftmost unprocessed token whose effective
/// classification sits at `level` and whose required operands are already
/// reduced. Occurrences still waiting on an operand are passed over; they
/// become eligible on a later round once a lower-precedence rule (for
/// example negation under exponentiation in `2^-3`) has reduced their
/// neighborhood.
fn find_reducible(nodes: &[TreeToken], level: u8) -> Option<usize> {
    for (offset, node) in nodes.iter().enumerate() {
        if node.is_processed() {
            continue;
        }
        let (precedence, arity) = classify(nodes, offset);
        if precedence != level {
            continue;
        }
        let left_ready = offset > 0 && nodes[offset - 1].is_processed();
        let right_ready = offset + 1 < nodes.len() && nodes[offset + 1].is_processed();
        let eligible = match arity {
            Arity::Hidden | Arity::Nullary => true,
            Arity::Unary(Fixity::Prefix) => right_ready,
            Arity::Unary(Fixity::Postfix) => left_ready,
            Arity::Binary => left_ready && right_ready,
        };
        if eligible {
            return Some(offset);
        }
    }
    None
}

/// Effective (precedence, arity) of the token at `offset`.
///
/// A minus token reads as unary negation when it has no reduced operand
/// immediately to its left — start of sequence, a sentinel, or a
/// still-unprocessed operator — and as binary subtraction otherwise. The
/// classification is positional and stateless; no second lexer pass.
fn classify(nodes: &[TreeToken], offset: usize) -> (u8, Arity) {
    let token_type = nodes[offset].token_type();
    if token_type == TokenType::Minus && (offset == 0 || !nodes[offset - 1].is_processed()) {
        (TokenType::NEGATION_PRECEDENCE, Arity::Unary(Fixity::Prefix))
    } else {
        (token_type.precedence(), token_type.arity())
    }
}

/// Collapses the token at `offset` with its operands, in place.
fn apply(nodes: &mut Vec<TreeToken>, offset: usize) {
    let (_, arity) = classify(nodes, offset);
    trace!(
        "reducing {} ({:?}) at offset {}, {} nodes left",
        nodes[offset].token_type().symbol(),
        arity,
        offset,
        nodes.len()
    );

    match arity {
        Arity::Hidden => {
            nodes.remove(offset);
        }
        Arity::Nullary => {
            nodes[offset].set_processed();
        }
        Arity::Unary(Fixity::Prefix) => {
            let child = nodes.remove(offset + 1);
            let node = &mut nodes[offset];
            node.add_child(child);
            node.set_processed();
        }
        Arity::Unary(Fixity::Postfix) => {
            let child = nodes.remove(offset - 1);
            let node = &mut nodes[offset - 1];
            node.add_child(child);
            node.set_processed();
        }
        Arity::Binary => {
            let right = nodes.remove(offset + 1);
            let left = nodes.remove(offset - 1);
            let node = &mut nodes[offset - 1];
            node.add_child(left);
            node.add_child(right);
            node.set_processed();
        }
    }
}

/// Resolves one bracket pair: the leftmost unprocessed close bracket and
/// the nearest unprocessed open bracket to its left. The span between them
/// is parsed recursively and the single resulting subtree spliced in place
/// of the whole bracketed group. Returns false when no unprocessed
/// brackets remain.
fn reduce_bracket(nodes: &mut Vec<TreeToken>, depth: usize) -> Result<bool, ParseError> {
    let close = nodes
        .iter()
        .position(|n| !n.is_processed() && n.token_type() == TokenType::BracketClose);

    let Some(close) = close else {
        // No close bracket left; any surviving open bracket can never match.
        if let Some(open) = nodes
            .iter()
            .find(|n| !n.is_processed() && n.token_type() == TokenType::BracketOpen)
        {
            return Err(ParseError::UnmatchedOpenBracket {
                location: open.token().location,
            });
        }
        return Ok(false);
    };

    let open = nodes[..close]
        .iter()
        .rposition(|n| !n.is_processed() && n.token_type() == TokenType::BracketOpen);
    let Some(open) = open else {
        return Err(ParseError::MismatchedCloseBracket {
            location: nodes[close].token().location,
        });
    };

    trace!("resolving bracket span {}..{}", open, close);
    let inner: Vec<TreeToken> = nodes.drain(open + 1..close).collect();
    let mut subtree = parse_sequence(inner, depth + 1)?;
    subtree.set_processed();
    // Both bracket tokens vanish with the span they delimited
    nodes.splice(open..=open + 1, std::iter::once(subtree));
    Ok(true)
}

/// Explains a sequence no reduction rule applies to. By this point all
/// hidden sentinels are gone, so what remains is either an operator still
/// missing an operand or two operands with nothing joining them.
fn diagnose_stuck(nodes: &[TreeToken]) -> ParseError {
    debug!("reduction stuck with {} nodes", nodes.len());
    if let Some(node) = nodes.iter().find(|n| !n.is_processed()) {
        return ParseError::MissingOperand {
            symbol: node.token_type().symbol(),
            location: node.token().location,
        };
    }
    ParseError::MissingOperator {
        location: nodes[1].token().location,
    }
}
