/// Token types for the pocl scanner.
use std::fmt;

use serde::Serialize;

/// Reserved words. `for`, `from` and `to` have no grammar yet but still
/// scan as keywords.
pub const KEYWORDS: [&str; 6] = ["print", "fn", "if", "for", "from", "to"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Classification of a scanned lexeme. The set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    Literal,
    Identifier,
    Operator,
    Paren,
    Brace,
    /// A lone `.` that did not form `..`.
    Error,
    /// Any character no other rule accepts.
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Literal => "LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Paren => "PAREN",
            TokenKind::Brace => "BRACE",
            TokenKind::Error => "ERROR",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset just past the last character of the lexeme.
    ///
    /// This is an end offset, not a start offset; use [`Token::start`] when
    /// the first character is needed.
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Byte offset of the token's first character.
    pub fn start(&self) -> usize {
        self.position.saturating_sub(self.lexeme.len())
    }

    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: '{}' @ {}>", self.kind, self.lexeme, self.position)
    }
}
