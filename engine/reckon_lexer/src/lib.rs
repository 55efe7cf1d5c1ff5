//! Lexical analysis for the reckon expression engine
//!
//! Converts a raw calculator expression into a stream of typed tokens for
//! the parser, bounded by hidden start/end sentinel tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, LexError, Lexer, LogosToken};
pub use token::{Arity, Fixity, Location, Token, TokenType};
