//! This module describes the abstract syntax tree of the parenthesized source language. The main
//! structure of this module is the [Node] that describes a program, a call or a literal. E.g.:
//!
//! ```lisp
//! (add 2 (subtract 4 2))
//! ```

use std::fmt::{self, Display};

/// Lines longer than this are broken by the pretty printer.
const MAX_WIDTH: usize = 80;

/// The kind of a [Node], used as the key of a [crate::traverse::Visitor].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    CallExpression,
    NumberLiteral,
    StringLiteral,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Program => write!(f, "Program"),
            NodeKind::CallExpression => write!(f, "CallExpression"),
            NodeKind::NumberLiteral => write!(f, "NumberLiteral"),
            NodeKind::StringLiteral => write!(f, "StringLiteral"),
        }
    }
}

/// The root of the tree, its body is the list of top level forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Node>,
}

/// A parenthesized call like `(add 2 2)`, the first name is the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Program(Program),
    CallExpression(CallExpression),

    /// The digits of an integer, kept as they were written.
    NumberLiteral(String),

    /// The contents of a string, without the quotes.
    StringLiteral(String),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
        }
    }

    /// Number of nodes in this tree, counting itself.
    pub fn size(&self) -> usize {
        match self {
            Node::Program(program) => program.size(),
            Node::CallExpression(call) => call.size(),
            Node::NumberLiteral(_) | Node::StringLiteral(_) => 1,
        }
    }

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Node {
        Node::CallExpression(CallExpression {
            name: name.into(),
            params,
        })
    }

    pub fn number(value: impl Into<String>) -> Node {
        Node::NumberLiteral(value.into())
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::StringLiteral(value.into())
    }

    /// Length of the node when it's printed in a single line.
    fn width(&self) -> usize {
        match self {
            Node::Program(program) => program.body.iter().map(Node::width).max().unwrap_or(0),
            Node::CallExpression(call) => call.width(),
            Node::NumberLiteral(value) => value.len(),
            Node::StringLiteral(value) => value.len() + 2,
        }
    }

    fn pretty_print(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            Node::Program(program) => program.pretty_print(f),
            Node::CallExpression(call) => call.pretty_print(f, indent),
            Node::NumberLiteral(value) => write!(f, "{value}"),
            Node::StringLiteral(value) => write!(f, "\"{value}\""),
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

    fn pretty_print(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.body.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            node.pretty_print(f, 0)?;
        }

        Ok(())
    }
}

impl CallExpression {
    pub fn size(&self) -> usize {
        1 + self.params.iter().map(Node::size).sum::<usize>()
    }

    fn width(&self) -> usize {
        let params: usize = self.params.iter().map(|param| param.width() + 1).sum();
        self.name.len() + params + 2
    }

    fn pretty_print(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "({}", self.name)?;

        if self.width() + indent > MAX_WIDTH {
            for param in &self.params {
                writeln!(f)?;
                write!(f, "{:indent$}", "", indent = indent + 2)?;
                param.pretty_print(f, indent + 2)?;
            }
        } else {
            for param in &self.params {
                write!(f, " ")?;
                param.pretty_print(f, indent)?;
            }
        }

        write!(f, ")")
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl From<CallExpression> for Node {
    fn from(call: CallExpression) -> Self {
        Node::CallExpression(call)
    }
}

/// Prints the node back in the parenthesized syntax, breaking calls that don't fit in a line.
impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_print(f, 0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pretty_print(f)
    }
}
