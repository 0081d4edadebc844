/// Recursive descent parser for pocl.
///
/// Expressions use two precedence tiers (additive over multiplicative over
/// primary), both left-associative. The first syntax error aborts the whole
/// parse; no partial tree is ever returned.
use crate::ast::*;
use crate::error::{Expected, ParseError};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Scan and parse a complete source string.
///
/// ```
/// use pocl_parser::parse_program;
///
/// let prog = parse_program("x = 1 + 2").unwrap();
/// assert_eq!(prog.statements.len(), 1);
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    parse(Lexer::tokenize(source))
}

/// Parse an already scanned token sequence.
///
/// ```
/// use pocl_parser::ast::Node;
/// use pocl_parser::{parse, tokenize};
///
/// let prog = parse(tokenize("print(7)")).unwrap();
/// assert_eq!(prog.statements, vec![Node::call("print", vec![Node::number("7")])]);
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}

/// Cursor over one token sequence. Each instance parses exactly one input.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while self.peek().is_some() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    fn at(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek().is_some_and(|tok| tok.is(kind, lexeme))
    }

    fn eat(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.at(kind, lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, lexeme: &str) -> Result<(), ParseError> {
        if self.eat(kind, lexeme) {
            Ok(())
        } else {
            Err(self.mismatch(kind, Some(lexeme)))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Identifier => {
                let name = tok.lexeme.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.mismatch(TokenKind::Identifier, None)),
        }
    }

    /// The scanner has no separator class, so `,` arrives as an `Unknown`
    /// token. Match it by text alone.
    fn eat_separator(&mut self) -> bool {
        if self.peek().is_some_and(|tok| tok.lexeme == ",") {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_operator(&mut self, operators: &[&str]) -> Option<String> {
        let tok = self.peek()?;
        if tok.kind != TokenKind::Operator || !operators.contains(&tok.lexeme.as_str()) {
            return None;
        }
        let op = tok.lexeme.clone();
        self.advance();
        Some(op)
    }

    fn mismatch(&self, kind: TokenKind, lexeme: Option<&str>) -> ParseError {
        ParseError::ExpectedTokenMismatch {
            expected: Expected {
                kind,
                lexeme: lexeme.map(str::to_string),
            },
            found: self.peek().into(),
        }
    }

    fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken {
            found: self.peek().into(),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let (kind, lexeme) = match self.peek() {
            Some(tok) => (tok.kind, tok.lexeme.clone()),
            None => return Err(self.unexpected()),
        };
        match (kind, lexeme.as_str()) {
            (TokenKind::Keyword, "fn") => self.parse_function_decl(),
            (TokenKind::Keyword, "if") => self.parse_if(),
            (TokenKind::Keyword, "print") => self.parse_print(),
            (TokenKind::Identifier, _) => self.parse_assignment_or_call(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_function_decl(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::Keyword, "fn")?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Paren, "(")?;

        let mut parameters = Vec::new();
        if self
            .peek()
            .is_some_and(|tok| tok.kind == TokenKind::Identifier)
        {
            parameters.push(self.expect_ident()?);
            while self.eat_separator() {
                parameters.push(self.expect_ident()?);
            }
        }

        self.expect(TokenKind::Paren, ")")?;
        let body = self.parse_block()?;
        Ok(Node::FunctionDecl {
            name,
            parameters,
            body,
        })
    }

    fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::Keyword, "if")?;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;
        Ok(Node::IfStatement {
            condition: Box::new(condition),
            body,
        })
    }

    /// `print(expr)` is sugar for a call to `print`.
    fn parse_print(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::Keyword, "print")?;
        self.expect(TokenKind::Paren, "(")?;
        let arg = self.parse_expression()?;
        self.expect(TokenKind::Paren, ")")?;
        Ok(Node::call("print", vec![arg]))
    }

    fn parse_assignment_or_call(&mut self) -> Result<Node, ParseError> {
        let target = Identifier::new(self.expect_ident()?);

        if self.eat(TokenKind::Paren, "(") {
            let arguments = self.parse_arguments()?;
            return Ok(Node::FunctionCall {
                callee: target,
                arguments,
            });
        }

        if self.eat(TokenKind::Operator, "+=") {
            let value = self.parse_expression()?;
            return Ok(Node::CompoundAssignment {
                target,
                operator: "+=".to_string(),
                value: Box::new(value),
            });
        }

        self.expect(TokenKind::Operator, "=")?;
        let value = self.parse_expression()?;
        Ok(Node::Assignment {
            target,
            value: Box::new(value),
        })
    }

    /// `{ Statement* }`
    fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        self.expect(TokenKind::Brace, "{")?;
        let mut body = Vec::new();
        while self.peek().is_some() && !self.at(TokenKind::Brace, "}") {
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::Brace, "}")?;
        Ok(body)
    }

    /// Argument list after the opening `(` has been consumed, up to and
    /// including the closing `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut args = Vec::new();
        if self.peek().is_some() && !self.at(TokenKind::Paren, ")") {
            args.push(self.parse_expression()?);
            while self.eat_separator() {
                args.push(self.parse_expression()?);
            }
        }
        self.expect(TokenKind::Paren, ")")?;
        Ok(args)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.eat_operator(&["+", "-"]) {
            let right = self.parse_multiplicative()?;
            left = Node::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_primary()?;
        while let Some(op) = self.eat_operator(&["*", "/"]) {
            let right = self.parse_primary()?;
            left = Node::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let Some(tok) = self.peek() else {
            return Err(self.unexpected());
        };
        match tok.kind {
            TokenKind::Literal => {
                let value = tok.lexeme.clone();
                self.advance();
                Ok(Node::number(value))
            }
            TokenKind::Identifier => {
                let name = tok.lexeme.clone();
                self.advance();
                if self.eat(TokenKind::Paren, "(") {
                    let arguments = self.parse_arguments()?;
                    Ok(Node::FunctionCall {
                        callee: Identifier::new(name),
                        arguments,
                    })
                } else {
                    Ok(Node::ident(name))
                }
            }
            TokenKind::Paren if tok.lexeme == "(" => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Paren, ")")?;
                Ok(expr)
            }
            _ => Err(self.unexpected()),
        }
    }
}
