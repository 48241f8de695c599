//! A generic depth first walker over the source tree. The walker knows the shape of the tree but
//! nothing about what a pass does with it: everything happens in the callbacks of a [Visitor],
//! that receive the node, its parent and the context of the pass.

use fxhash::FxHashMap;

use crate::error::TraversalError;
use crate::syntax::{Node, NodeKind};

pub type Result<T, E = TraversalError> = std::result::Result<T, E>;

/// A callback that receives the current node, its parent (`None` for the root) and the
/// accumulator of the pass.
pub type Hook<'a, C> = Box<dyn FnMut(&Node, Option<&Node>, &mut C) -> Result<()> + 'a>;

/// The pair of callbacks of a single node kind. `enter` runs before the children of the node are
/// visited and `exit` after.
pub struct Hooks<'a, C> {
    pub enter: Option<Hook<'a, C>>,
    pub exit: Option<Hook<'a, C>>,
}

impl<C> Default for Hooks<'_, C> {
    fn default() -> Self {
        Self {
            enter: None,
            exit: None,
        }
    }
}

/// Table of callbacks by node kind. Kinds without an entry are walked through silently.
pub struct Visitor<'a, C> {
    hooks: FxHashMap<NodeKind, Hooks<'a, C>>,
}

impl<C> Default for Visitor<'_, C> {
    fn default() -> Self {
        Self {
            hooks: FxHashMap::default(),
        }
    }
}

impl<'a, C> Visitor<'a, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(&Node, Option<&Node>, &mut C) -> Result<()> + 'a,
    {
        self.hooks.entry(kind).or_default().enter = Some(Box::new(f));
        self
    }

    pub fn exit<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(&Node, Option<&Node>, &mut C) -> Result<()> + 'a,
    {
        self.hooks.entry(kind).or_default().exit = Some(Box::new(f));
        self
    }

    fn run_enter(&mut self, node: &Node, parent: Option<&Node>, context: &mut C) -> Result<()> {
        match self.hooks.get_mut(&node.kind()).and_then(|hooks| hooks.enter.as_mut()) {
            Some(enter) => enter(node, parent, context),
            None => Ok(()),
        }
    }

    fn run_exit(&mut self, node: &Node, parent: Option<&Node>, context: &mut C) -> Result<()> {
        match self.hooks.get_mut(&node.kind()).and_then(|hooks| hooks.exit.as_mut()) {
            Some(exit) => exit(node, parent, context),
            None => Ok(()),
        }
    }

    fn visit_all(&mut self, children: &[Node], parent: &Node, context: &mut C) -> Result<()> {
        for child in children {
            self.visit(child, Some(parent), context)?;
        }

        Ok(())
    }

    fn visit(&mut self, node: &Node, parent: Option<&Node>, context: &mut C) -> Result<()> {
        // A program only exists as the root of a tree.
        if let (Node::Program(_), Some(_)) = (node, parent) {
            return Err(TraversalError::Misplaced { kind: node.kind() });
        }

        self.run_enter(node, parent, context)?;

        match node {
            Node::Program(program) => self.visit_all(&program.body, node, context)?,
            Node::CallExpression(call) => self.visit_all(&call.params, node, context)?,
            Node::NumberLiteral(_) | Node::StringLiteral(_) => {}
        }

        self.run_exit(node, parent, context)
    }
}

/// Walks the tree from `root`, calling the hooks of the visitor with `context`.
pub fn traverse<C>(root: &Node, visitor: &mut Visitor<'_, C>, context: &mut C) -> Result<()> {
    visitor.visit(root, None, context)
}
