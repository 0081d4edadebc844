//! Read-only consumers of the front end's output: token listings, the
//! indented tree printer, JSON dumps, and located diagnostics.

use anyhow::Result;
use pocl_parser::ast::{Node, Program};
use pocl_parser::error::Found;
use pocl_parser::{ParseError, Token, TokenKind};
use serde::Serialize;

/// One token per line, `<KIND: 'lexeme' @ end>`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&tok.to_string());
        out.push('\n');
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// 1-based line and column (in characters) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

/// Render a parse error against the source it came from. Tokens record
/// their end offset, so the location is taken from the token's start.
pub fn diagnostic(source: &str, err: &ParseError) -> String {
    match err.found() {
        Found::Token(tok) => {
            let (line, col) = line_col(source, tok.start());
            format!("error at line {line}, col {col}: {err}")
        }
        Found::EndOfInput => format!("error at end of input: {err}"),
    }
}

/// Scan-time problems. These never stop scanning; the parser rejects the
/// offending tokens later if the grammar reaches them.
pub fn scan_warnings(source: &str, tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|tok| {
            let what = match tok.kind {
                TokenKind::Unknown => "unrecognized character",
                TokenKind::Error => "malformed range operator",
                _ => return None,
            };
            let (line, col) = line_col(source, tok.start());
            Some(format!(
                "warning at line {line}, col {col}: {what} '{}'",
                tok.lexeme
            ))
        })
        .collect()
}

/// Indented tree listing. Each level is four spaces; child labels sit two
/// spaces in from their parent.
pub fn print_ast(program: &Program) -> String {
    let mut printer = TreePrinter::default();
    printer.line(0, "Program");
    for stmt in &program.statements {
        printer.node(stmt, 1);
    }
    printer.out
}

#[derive(Default)]
struct TreePrinter {
    out: String,
}

impl TreePrinter {
    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn label(&mut self, indent: usize, text: &str) {
        self.line(indent, &format!("  {text}"));
    }

    fn block(&mut self, body: &[Node], indent: usize) {
        for stmt in body {
            self.node(stmt, indent);
        }
    }

    fn node(&mut self, node: &Node, indent: usize) {
        match node {
            Node::BinaryOp {
                left,
                operator,
                right,
            } => {
                self.line(indent, &format!("BinaryOp '{operator}'"));
                self.label(indent, "Left:");
                self.node(left, indent + 2);
                self.label(indent, "Right:");
                self.node(right, indent + 2);
            }
            Node::UnaryOp { operator, operand } => {
                self.line(indent, &format!("UnaryOp '{operator}'"));
                self.label(indent, "Operand:");
                self.node(operand, indent + 2);
            }
            Node::Number { value } => self.line(indent, &format!("Number: {value}")),
            Node::Identifier(ident) => self.line(indent, &format!("Identifier: {}", ident.name)),
            Node::Assignment { target, value } => {
                self.line(indent, "Assignment");
                self.label(indent, "Target:");
                self.line(indent + 2, &format!("Identifier: {}", target.name));
                self.label(indent, "Value:");
                self.node(value, indent + 2);
            }
            Node::CompoundAssignment {
                target,
                operator,
                value,
            } => {
                self.line(indent, &format!("CompoundAssignment '{operator}'"));
                self.label(indent, "Target:");
                self.line(indent + 2, &format!("Identifier: {}", target.name));
                self.label(indent, "Value:");
                self.node(value, indent + 2);
            }
            Node::FunctionCall { callee, arguments } => {
                self.line(indent, "FunctionCall");
                self.label(indent, "Name:");
                self.line(indent + 2, &format!("Identifier: {}", callee.name));
                self.label(indent, "Arguments:");
                self.block(arguments, indent + 2);
            }
            Node::FunctionDecl {
                name,
                parameters,
                body,
            } => {
                self.line(indent, &format!("FunctionDecl '{name}'"));
                self.label(indent, &format!("Parameters: {}", parameters.join(", ")));
                self.label(indent, "Body:");
                self.block(body, indent + 2);
            }
            Node::IfStatement { condition, body } => {
                self.line(indent, "IfStatement");
                self.label(indent, "Condition:");
                self.node(condition, indent + 2);
                self.label(indent, "Body:");
                self.block(body, indent + 2);
            }
        }
    }
}
