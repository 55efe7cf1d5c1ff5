use std::fmt;

/// Represents a token's location in the input expression.
///
/// Tracks the position of a token in the source text, including line and
/// column numbers (1-based) and the byte offset (0-based). Calculator input
/// is usually a single line, but positions stay correct for multi-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// The 1-based line number in the input
    pub line: usize,
    /// The 1-based column number in the input
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

/// How many operands an operator token consumes, and from where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Structural only (the start/end sentinels); consumes nothing and
    /// produces no value.
    Hidden,
    /// A complete operand by itself (numbers, bracket groups).
    Nullary,
    /// One operand, taken from the given side.
    Unary(Fixity),
    /// Two operands, one from each side.
    Binary,
}

/// Which side a unary operator takes its operand from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fixity {
    /// Operand to the right: `-3`
    Prefix,
    /// Operand to the left: `3!`
    Postfix,
}

/// The type of a token in a calculator expression.
///
/// Every member carries a fixed binding strength ([`precedence`]) and an
/// [`arity`] classification; together these drive the parser's reduction
/// order. Exactly one hidden start and one hidden end type exist, and every
/// tokenized input is bounded by one of each.
///
/// A minus sign is always lexed as [`TokenType::Minus`] whether it means
/// subtraction or negation; the parser tells the two apart from context.
///
/// [`precedence`]: TokenType::precedence
/// [`arity`]: TokenType::arity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenType {
    /// Hidden marker preceding every token stream
    Start,
    /// Hidden marker terminating every token stream
    End,
    /// A numeric literal
    Number(f64),
    /// `(`
    BracketOpen,
    /// `)`
    BracketClose,
    /// `+`
    Plus,
    /// `-` (subtraction or negation; disambiguated by the parser)
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `!` (postfix factorial)
    Bang,
}

impl TokenType {
    /// Binding strength of `-` when it denotes negation rather than
    /// subtraction. Sits between exponentiation and the multiplicative
    /// operators, so `-3^2` is `-(3^2)` but `2*-3` negates before it
    /// multiplies.
    pub const NEGATION_PRECEDENCE: u8 = 25;

    /// Every member of the closed enumeration, with a representative
    /// payload for `Number`. The parser derives its reduction table from
    /// this list.
    pub const ALL: [TokenType; 12] = [
        TokenType::Start,
        TokenType::End,
        TokenType::Number(0.0),
        TokenType::BracketOpen,
        TokenType::BracketClose,
        TokenType::Plus,
        TokenType::Minus,
        TokenType::Star,
        TokenType::Slash,
        TokenType::Percent,
        TokenType::Caret,
        TokenType::Bang,
    ];

    /// Binding strength; a higher value reduces first.
    ///
    /// For `Minus` this is the binding strength of binary subtraction; see
    /// [`TokenType::NEGATION_PRECEDENCE`] for the unary reading.
    pub fn precedence(&self) -> u8 {
        match self {
            TokenType::BracketOpen | TokenType::BracketClose => 50,
            TokenType::Number(_) => 40,
            TokenType::Bang => 35,
            TokenType::Caret => 30,
            TokenType::Star | TokenType::Slash | TokenType::Percent => 20,
            TokenType::Plus | TokenType::Minus => 15,
            TokenType::Start | TokenType::End => 0,
        }
    }

    /// Arity classification consulted by the parser's dispatch.
    ///
    /// `Minus` classifies as `Binary` here; the parser substitutes
    /// `Unary(Prefix)` per-occurrence when the token has no reduced operand
    /// on its left.
    pub fn arity(&self) -> Arity {
        match self {
            TokenType::Start | TokenType::End => Arity::Hidden,
            TokenType::Number(_) | TokenType::BracketOpen | TokenType::BracketClose => {
                Arity::Nullary
            }
            TokenType::Bang => Arity::Unary(Fixity::Postfix),
            TokenType::Caret
            | TokenType::Star
            | TokenType::Slash
            | TokenType::Percent
            | TokenType::Plus
            | TokenType::Minus => Arity::Binary,
        }
    }

    /// The symbol as written in an expression, for error messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenType::Start => "start of input",
            TokenType::End => "end of input",
            TokenType::Number(_) => "number",
            TokenType::BracketOpen => "(",
            TokenType::BracketClose => ")",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Percent => "%",
            TokenType::Caret => "^",
            TokenType::Bang => "!",
        }
    }

    /// True for the hidden start/end sentinels.
    pub fn is_hidden(&self) -> bool {
        matches!(self.arity(), Arity::Hidden)
    }

    /// True for `(` and `)`.
    pub fn is_bracket(&self) -> bool {
        matches!(self, TokenType::BracketOpen | TokenType::BracketClose)
    }
}

/// A token in a calculator expression: its type, original text, and location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token (empty for the sentinels)
    pub lexeme: String,
    /// The location of the token in the input
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates a hidden sentinel token at the given location.
    pub fn sentinel(token_type: TokenType, location: Location) -> Self {
        Self {
            token_type,
            lexeme: String::new(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}
