//! This module describes the tree of the target language, where calls are written as
//! `name(arg, arg)` and top level calls are statements ending with `;`. It's built by
//! [crate::transform] and printed by [crate::codegen].

use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Program,
    ExpressionStatement,
    CallExpression,
    Identifier,
    NumberLiteral,
    StringLiteral,
}

impl Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Program => write!(f, "Program"),
            TargetKind::ExpressionStatement => write!(f, "ExpressionStatement"),
            TargetKind::CallExpression => write!(f, "CallExpression"),
            TargetKind::Identifier => write!(f, "Identifier"),
            TargetKind::NumberLiteral => write!(f, "NumberLiteral"),
            TargetKind::StringLiteral => write!(f, "StringLiteral"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Node>,
}

/// A call used as a statement, it's printed with a trailing `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(String),
    StringLiteral(String),
}

impl Node {
    pub fn kind(&self) -> TargetKind {
        match self {
            Node::Program(_) => TargetKind::Program,
            Node::ExpressionStatement(_) => TargetKind::ExpressionStatement,
            Node::CallExpression(_) => TargetKind::CallExpression,
            Node::Identifier(_) => TargetKind::Identifier,
            Node::NumberLiteral(_) => TargetKind::NumberLiteral,
            Node::StringLiteral(_) => TargetKind::StringLiteral,
        }
    }

    /// Number of expressions in the tree. A statement counts together with its call, and a callee
    /// is part of its call, so the size matches the source tree the node was built from.
    pub fn size(&self) -> usize {
        match self {
            Node::Program(program) => program.size(),
            Node::ExpressionStatement(statement) => statement.expression.size(),
            Node::CallExpression(call) => call.size(),
            Node::Identifier(_) | Node::NumberLiteral(_) | Node::StringLiteral(_) => 1,
        }
    }
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    pub fn size(&self) -> usize {
        1 + self.body.iter().map(Node::size).sum::<usize>()
    }
}

impl CallExpression {
    pub fn new(name: impl Into<String>, arguments: Vec<Node>) -> Self {
        Self {
            callee: Identifier { name: name.into() },
            arguments,
        }
    }

    pub fn size(&self) -> usize {
        1 + self.arguments.iter().map(Node::size).sum::<usize>()
    }

    /// Turns the call into a top level statement.
    pub fn into_statement(self) -> Node {
        Node::ExpressionStatement(ExpressionStatement { expression: self })
    }
}

impl From<CallExpression> for Node {
    fn from(call: CallExpression) -> Self {
        Node::CallExpression(call)
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}
