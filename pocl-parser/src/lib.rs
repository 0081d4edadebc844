pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::ParseError;
/// Re-export the parser entry points as the primary API.
pub use parser::{parse, parse_program, Parser};
pub use token::{Token, TokenKind};

/// Scan `source` into tokens. Never fails; malformed input shows up as
/// `Error` and `Unknown` tokens.
///
/// ```
/// use pocl_parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("x1 = 2");
/// assert_eq!(tokens[0].kind, TokenKind::Identifier);
/// assert_eq!(tokens[0].lexeme, "x1");
/// assert_eq!(tokens[2].position, 6);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    lexer::Lexer::tokenize(source)
}
