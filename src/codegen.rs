//! Prints a target tree as source text of the target language.

use tracing::debug;

use crate::error::CodegenError;
use crate::target::{CallExpression, Node, Program};

pub type Result<T, E = CodegenError> = std::result::Result<T, E>;

/// Where a node is being printed. Programs are only valid at the root, and statements only at the
/// root or in the body of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Root,
    Body,
    Argument,
}

/// Every level of the tree appends into the same output buffer.
#[derive(Default)]
struct Generator {
    output: String,
}

impl Generator {
    fn call(&mut self, call: &CallExpression) -> Result<()> {
        self.output.push_str(&call.callee.name);
        self.output.push('(');

        for (index, argument) in call.arguments.iter().enumerate() {
            if index > 0 {
                self.output.push_str(", ");
            }
            self.node(argument, Place::Argument)?;
        }

        self.output.push(')');
        Ok(())
    }

    fn program(&mut self, program: &Program) -> Result<()> {
        for (index, node) in program.body.iter().enumerate() {
            if index > 0 {
                self.output.push('\n');
            }
            self.node(node, Place::Body)?;
        }

        Ok(())
    }

    fn node(&mut self, node: &Node, place: Place) -> Result<()> {
        match (node, place) {
            (Node::Program(program), Place::Root) => self.program(program),
            (Node::ExpressionStatement(statement), Place::Root | Place::Body) => {
                self.call(&statement.expression)?;
                self.output.push(';');
                Ok(())
            }
            (Node::Program(_) | Node::ExpressionStatement(_), _) => {
                Err(CodegenError::Misplaced { kind: node.kind() })
            }
            (Node::CallExpression(call), _) => self.call(call),
            (Node::Identifier(identifier), _) => {
                self.output.push_str(&identifier.name);
                Ok(())
            }
            (Node::NumberLiteral(value), _) => {
                self.output.push_str(value);
                Ok(())
            }

            // Quotes and backslashes inside the string are printed as they are.
            (Node::StringLiteral(value), _) => {
                self.output.push('"');
                self.output.push_str(value);
                self.output.push('"');
                Ok(())
            }
        }
    }

    fn finish(self) -> String {
        debug!(bytes = self.output.len(), "generated code");
        self.output
    }
}

/// Prints a node and everything below it.
pub fn generate(node: &Node) -> Result<String> {
    let mut generator = Generator::default();
    generator.node(node, Place::Root)?;
    Ok(generator.finish())
}

/// Prints a whole program, one statement per line.
pub fn generate_program(program: &Program) -> Result<String> {
    let mut generator = Generator::default();
    generator.program(program)?;
    Ok(generator.finish())
}
