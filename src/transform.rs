//! Rewrites the source tree into the target tree. The pass is a [Visitor] over the source tree
//! whose context is a stack of destination containers: the bottom one is the body of the new
//! program, and every call that is being visited owns the one above it, where its arguments are
//! collected.

use tracing::debug;

use crate::error::TraversalError;
use crate::syntax::{self, Node, NodeKind};
use crate::target;
use crate::traverse::{traverse, Result, Visitor};

/// The accumulator of the transform pass.
#[derive(Debug, Default)]
struct Destinations {
    stack: Vec<Vec<target::Node>>,
}

impl Destinations {
    /// Opens the container the children of a node will be appended into.
    fn open(&mut self) {
        self.stack.push(Vec::new());
    }

    fn close(&mut self, kind: NodeKind) -> Result<Vec<target::Node>> {
        self.stack.pop().ok_or(TraversalError::Detached { kind })
    }

    /// Appends a finished node into the innermost open container.
    fn push(&mut self, kind: NodeKind, node: target::Node) -> Result<()> {
        let destination = self
            .stack
            .last_mut()
            .ok_or(TraversalError::Detached { kind })?;
        destination.push(node);
        Ok(())
    }
}

fn is_call(node: Option<&Node>) -> bool {
    matches!(node, Some(Node::CallExpression(_)))
}

fn visitor<'a>() -> Visitor<'a, Destinations> {
    Visitor::new()
        .enter(NodeKind::Program, |_, _, destinations: &mut Destinations| {
            destinations.open();
            Ok(())
        })
        .enter(NodeKind::NumberLiteral, |node, _, destinations| {
            if let Node::NumberLiteral(value) = node {
                destinations.push(node.kind(), target::Node::NumberLiteral(value.clone()))?;
            }
            Ok(())
        })
        .enter(NodeKind::StringLiteral, |node, _, destinations| {
            if let Node::StringLiteral(value) = node {
                destinations.push(node.kind(), target::Node::StringLiteral(value.clone()))?;
            }
            Ok(())
        })
        .enter(NodeKind::CallExpression, |_, _, destinations| {
            destinations.open();
            Ok(())
        })
        .exit(NodeKind::CallExpression, |node, parent, destinations| {
            let Node::CallExpression(call) = node else {
                return Ok(());
            };

            let arguments = destinations.close(node.kind())?;
            let expression = target::CallExpression::new(call.name.clone(), arguments);

            if is_call(parent) {
                destinations.push(node.kind(), expression.into())
            } else {
                destinations.push(node.kind(), expression.into_statement())
            }
        })
}

/// Builds the target tree of a program, one target node for every source node.
pub fn transform(program: syntax::Program) -> Result<target::Program> {
    let root = Node::Program(program);
    let mut destinations = Destinations::default();

    traverse(&root, &mut visitor(), &mut destinations)?;

    let body = destinations.close(NodeKind::Program)?;
    let program = target::Program::new(body);
    debug!(statements = program.body.len(), nodes = program.size(), "transformed program");

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Program;

    #[test]
    fn wraps_only_top_level_calls() {
        let source = Program::new(vec![Node::call(
            "add",
            vec![
                Node::number("2"),
                Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
            ],
        )]);

        let expected = target::Program::new(vec![target::CallExpression::new(
            "add",
            vec![
                target::Node::NumberLiteral("2".to_string()),
                target::CallExpression::new(
                    "subtract",
                    vec![
                        target::Node::NumberLiteral("4".to_string()),
                        target::Node::NumberLiteral("2".to_string()),
                    ],
                )
                .into(),
            ],
        )
        .into_statement()]);

        assert_eq!(transform(source).unwrap(), expected);
    }

    #[test]
    fn keeps_order_of_siblings() {
        let source = Program::new(vec![
            Node::call("first", vec![Node::string("a"), Node::call("now", vec![])]),
            Node::number("3"),
            Node::call("second", vec![]),
        ]);

        let body = transform(source).unwrap().body;

        assert_eq!(body.len(), 3);
        assert_eq!(body[1], target::Node::NumberLiteral("3".to_string()));
        assert_eq!(body[2], target::CallExpression::new("second", vec![]).into_statement());
        let target::Node::ExpressionStatement(first) = &body[0] else {
            panic!("expected a statement, got {:?}", body[0]);
        };
        assert_eq!(first.expression.callee.name, "first");
        assert_eq!(
            first.expression.arguments,
            vec![
                target::Node::StringLiteral("a".to_string()),
                target::CallExpression::new("now", vec![]).into(),
            ]
        );
    }

    #[test]
    fn preserves_tree_size() {
        let source = Program::new(vec![
            Node::call(
                "a",
                vec![Node::call("b", vec![Node::call("c", vec![Node::number("1")])])],
            ),
            Node::call("d", vec![Node::string("x"), Node::number("2")]),
        ]);
        let size = source.size();

        assert_eq!(transform(source).unwrap().size(), size);
    }

    #[test]
    fn empty_program_stays_empty() {
        assert_eq!(
            transform(Program::default()).unwrap(),
            target::Program::default()
        );
    }
}
