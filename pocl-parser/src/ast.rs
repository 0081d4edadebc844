/// Owned AST types for the pocl language.
///
/// The tree is built once by the parser and only read afterwards. Every
/// child is owned by exactly one parent. All types are `Clone + Debug` and
/// serialize with serde for tooling that wants a machine-readable dump.
use serde::Serialize;

/// A complete program: the root of every tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub statements: Vec<Node>,
}

/// A bare name, used as an expression and as the target of assignments
/// and calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Statement and expression variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    BinaryOp {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    /// Reserved: no grammar rule produces this yet.
    UnaryOp {
        operator: String,
        operand: Box<Node>,
    },
    /// Integer literal kept in its source form.
    Number {
        value: String,
    },
    Identifier(Identifier),
    Assignment {
        target: Identifier,
        value: Box<Node>,
    },
    CompoundAssignment {
        target: Identifier,
        operator: String,
        value: Box<Node>,
    },
    FunctionCall {
        callee: Identifier,
        arguments: Vec<Node>,
    },
    FunctionDecl {
        name: String,
        parameters: Vec<String>,
        body: Vec<Node>,
    },
    IfStatement {
        condition: Box<Node>,
        body: Vec<Node>,
    },
}

impl Node {
    pub fn number(value: impl Into<String>) -> Self {
        Node::Number {
            value: value.into(),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier::new(name))
    }

    pub fn binary(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Node::BinaryOp {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::FunctionCall {
            callee: Identifier::new(callee),
            arguments,
        }
    }
}
