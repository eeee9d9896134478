use crate::canonicalizer::Canonicalizer;
use formula_ast::{Node, Value};
use std::rc::Rc;

/// Result of a rule application
pub struct Rewrite<V> {
    /// The replacement for the matched node
    pub new_node: Rc<Node<V>>,
    /// Human-readable form of the identity that was applied
    pub description: &'static str,
}

impl<V> Rewrite<V> {
    pub fn new(new_node: Rc<Node<V>>, description: &'static str) -> Self {
        Rewrite {
            new_node,
            description,
        }
    }
}

/// A rewrite rule matched against the root of a node.
///
/// Rules get the canonicalizer so they can canonicalize the pieces they
/// rebuild. They never fail: a rule whose guard cannot be decided simply
/// does not match.
pub trait Rule {
    fn name(&self) -> &'static str;

    fn apply<V: Value>(
        &self,
        canon: &mut Canonicalizer<V>,
        node: &Rc<Node<V>>,
    ) -> Option<Rewrite<V>>;
}
