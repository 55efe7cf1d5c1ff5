//! Lexer for calculator expressions using the 'logos' crate.
//!
//! Recognizes numeric literals, the arithmetic operator set, and brackets,
//! and brackets every token stream with hidden start/end sentinels so the
//! parser never needs bounds checks for adjacent-token lookups.

use crate::token::{Location, Token, TokenType};
use logos::Logos;
use thiserror::Error;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    /// Contiguous digits with at most one decimal point
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse().ok())]
    Number(f64),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Whitespace is skipped and carries no token
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Whitespace,
}

/// An error produced while tokenizing an expression.
///
/// Always fatal to the current evaluation; the offending text and its
/// position are carried verbatim for the caller's message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// Input that matches no token type at all.
    #[error("unrecognized character '{lexeme}' at column {}", .location.column)]
    UnrecognizedInput {
        /// The text that could not be tokenized
        lexeme: String,
        /// Where it occurred
        location: Location,
    },
    /// A broken numeric literal, such as a stray decimal point.
    #[error("malformed number literal '{lexeme}' at column {}", .location.column)]
    MalformedNumber {
        /// The text that could not be tokenized
        lexeme: String,
        /// Where it occurred
        location: Location,
    },
}

/// Calculator expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Current byte offset in source
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given expression text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// The position the lexer has advanced to
    pub fn position(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Convert a LogosToken to our semantic Token type
    fn convert_token(&self, logos_token: LogosToken, lexeme: &str) -> Token {
        let token_type = match logos_token {
            LogosToken::Number(value) => TokenType::Number(value),
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::Percent => TokenType::Percent,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::Bang => TokenType::Bang,
            LogosToken::LParen => TokenType::BracketOpen,
            LogosToken::RParen => TokenType::BracketClose,
            // Skipped by logos, never yielded
            LogosToken::Whitespace => unreachable!("whitespace is skipped"),
        };

        Token::new(token_type, lexeme, self.position())
    }

    /// Classify an unlexable slice: something that starts like a number is a
    /// broken literal, anything else is simply unrecognized.
    fn lex_error(&self, lexeme: &str) -> LexError {
        let location = self.position();
        if lexeme.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            LexError::MalformedNumber {
                lexeme: lexeme.to_string(),
                location,
            }
        } else {
            LexError::UnrecognizedInput {
                lexeme: lexeme.to_string(),
                location,
            }
        }
    }

    /// Update line and column numbers based on lexeme
    fn update_position(&mut self, lexeme: &str) {
        for c in lexeme.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.offset += c.len_utf8();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.logos_lexer.next()?;
        let skipped = self.logos_lexer.span().start - self.offset;
        if skipped > 0 {
            // Account for whitespace logos skipped before this token
            let source = self.logos_lexer.source();
            let gap = &source[self.offset..self.offset + skipped];
            self.update_position(gap);
        }
        let lexeme = self.logos_lexer.slice();
        let item = match logos_token {
            Ok(token) => Ok(self.convert_token(token, lexeme)),
            Err(_) => Err(self.lex_error(lexeme)),
        };
        self.update_position(lexeme);
        Some(item)
    }
}

/// Tokenizes a whole expression, bounding it with the hidden sentinels.
///
/// Returns the ordered token sequence, beginning with [`TokenType::Start`]
/// and ending with [`TokenType::End`], or the first [`LexError`] hit.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::with_capacity(input.len() / 2 + 2);
    tokens.push(Token::sentinel(TokenType::Start, Location::default()));

    let mut lexer = Lexer::new(input);
    for token in lexer.by_ref() {
        tokens.push(token?);
    }
    tokens.push(Token::sentinel(TokenType::End, lexer.position()));

    #[cfg(feature = "logging")]
    log::debug!("tokenized {:?} into {} tokens", input, tokens.len());

    Ok(tokens)
}
