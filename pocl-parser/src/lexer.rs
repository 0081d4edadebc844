/// Single-pass scanner for pocl source code.
///
/// Scanning never fails. Characters no rule accepts become `Unknown`
/// tokens and a lone `.` becomes an `Error` token, so one bad character
/// does not stop the rest of the input from being scanned.
use crate::token::{is_keyword, Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn tokenize(source: &'a str) -> Vec<Token> {
        let mut lexer = Lexer { source, pos: 0 };
        let mut tokens = Vec::new();
        while let Some(tok) = lexer.next_token() {
            tokens.push(tok);
        }
        tokens
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Build a token ending at the current cursor.
    fn emit(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.pos)
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let ch = self.advance()?;

        // Numbers (unsigned decimal only)
        if ch.is_ascii_digit() {
            self.eat_while(|c| c.is_ascii_digit());
            return Some(self.emit(TokenKind::Literal, &self.source[start..self.pos]));
        }

        // Identifiers and keywords
        if ch.is_alphabetic() {
            self.eat_while(char::is_alphanumeric);
            let word = &self.source[start..self.pos];
            let kind = if is_keyword(word) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            return Some(self.emit(kind, word));
        }

        let tok = match ch {
            '.' => {
                if self.peek() == Some('.') {
                    self.advance();
                    self.emit(TokenKind::Operator, "..")
                } else {
                    self.emit(TokenKind::Error, ".")
                }
            }
            '=' | '+' | '-' | '*' | '/' => self.emit(TokenKind::Operator, ch),
            '(' | ')' => self.emit(TokenKind::Paren, ch),
            '{' | '}' => self.emit(TokenKind::Brace, ch),
            _ => self.emit(TokenKind::Unknown, ch),
        };
        Some(tok)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(src: &str) -> Vec<String> {
        Lexer::tokenize(src).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn operators() {
        assert_eq!(kinds("= + - * /"), vec![TokenKind::Operator; 5]);
        assert_eq!(lexemes("= + - * /"), vec!["=", "+", "-", "*", "/"]);
    }

    #[test]
    fn adjacent_operators_are_not_merged() {
        assert_eq!(lexemes("+-"), vec!["+", "-"]);
        assert_eq!(lexemes("+="), vec!["+", "="]);
    }

    #[test]
    fn range_operator() {
        let tokens = Lexer::tokenize("..");
        assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "..", 2)]);
    }

    #[test]
    fn lone_dot_is_error() {
        let tokens = Lexer::tokenize(".");
        assert_eq!(tokens, vec![Token::new(TokenKind::Error, ".", 1)]);
    }

    #[test]
    fn lone_dot_does_not_swallow_next_char() {
        let tokens = Lexer::tokenize(".x");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Error, ".", 1),
                Token::new(TokenKind::Identifier, "x", 2),
            ]
        );
    }

    #[test]
    fn three_dots() {
        assert_eq!(kinds("..."), vec![TokenKind::Operator, TokenKind::Error]);
    }

    #[test]
    fn keywords() {
        assert_eq!(kinds("print fn if for from to"), vec![TokenKind::Keyword; 6]);
    }

    #[test]
    fn ident_not_keyword() {
        let tokens = Lexer::tokenize("printer");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "printer");
    }

    #[test]
    fn ident_with_digits_is_one_token() {
        let tokens = Lexer::tokenize("x1");
        assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "x1", 2)]);
    }

    #[test]
    fn digits_then_letters_split() {
        assert_eq!(
            Lexer::tokenize("1x"),
            vec![
                Token::new(TokenKind::Literal, "1", 1),
                Token::new(TokenKind::Identifier, "x", 2),
            ]
        );
    }

    #[test]
    fn number_literal() {
        let tokens = Lexer::tokenize("  42");
        assert_eq!(tokens, vec![Token::new(TokenKind::Literal, "42", 4)]);
    }

    #[test]
    fn delimiters() {
        assert_eq!(
            kinds("(){}"),
            vec![
                TokenKind::Paren,
                TokenKind::Paren,
                TokenKind::Brace,
                TokenKind::Brace,
            ]
        );
    }

    #[test]
    fn unknown_characters() {
        let tokens = Lexer::tokenize("a , $");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "a", 1),
                Token::new(TokenKind::Unknown, ",", 3),
                Token::new(TokenKind::Unknown, "$", 5),
            ]
        );
    }

    #[test]
    fn carriage_return_is_not_whitespace() {
        assert_eq!(
            kinds("a\r\nb"),
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn whitespace_only() {
        assert!(Lexer::tokenize(" \t\n  \n").is_empty());
        assert!(Lexer::tokenize("").is_empty());
    }

    #[test]
    fn positions_are_end_offsets() {
        let tokens = Lexer::tokenize("x = 10 + y");
        let ends: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(ends, vec![1, 3, 6, 8, 10]);
        let starts: Vec<usize> = tokens.iter().map(|t| t.start()).collect();
        assert_eq!(starts, vec![0, 2, 4, 7, 9]);
    }

    #[test]
    fn multibyte_characters() {
        // Offsets are byte offsets.
        let src = "é1 → x";
        let tokens = Lexer::tokenize(src);
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "é1", 3));
        assert_eq!(tokens[1], Token::new(TokenKind::Unknown, "→", 7));
        assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "x", 9));
        for tok in &tokens {
            assert_eq!(&src[tok.start()..tok.position], tok.lexeme);
        }
    }

    #[test]
    fn token_display() {
        let tokens = Lexer::tokenize("fn");
        assert_eq!(tokens[0].to_string(), "<KEYWORD: 'fn' @ 2>");
    }
}
