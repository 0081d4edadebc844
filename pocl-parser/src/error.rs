/// Parse errors. Scanning never fails; every error here comes from the parser.
use std::fmt;

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// What the parser was looking at when it gave up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput,
}

impl From<Option<&Token>> for Found {
    fn from(tok: Option<&Token>) -> Self {
        match tok {
            Some(tok) => Found::Token(tok.clone()),
            None => Found::EndOfInput,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(tok) => write!(f, "{tok}"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A required token: its classification and, for punctuation and
/// keywords, its exact text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expected {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "{} `{}`", self.kind, lexeme),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A statement or primary expression starts with a token no rule accepts.
    #[error("unexpected token {found}")]
    UnexpectedToken { found: Found },
    /// A specific token was required and something else (or nothing) was there.
    #[error("expected {expected}, found {found}")]
    ExpectedTokenMismatch { expected: Expected, found: Found },
}

impl ParseError {
    pub fn found(&self) -> &Found {
        match self {
            ParseError::UnexpectedToken { found } => found,
            ParseError::ExpectedTokenMismatch { found, .. } => found,
        }
    }

    /// End offset of the offending token, or `None` when input ran out.
    pub fn position(&self) -> Option<usize> {
        match self.found() {
            Found::Token(tok) => Some(tok.position),
            Found::EndOfInput => None,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.found(), Found::EndOfInput)
    }
}
