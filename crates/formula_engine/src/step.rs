use formula_ast::{Node, Rational};
use std::fmt;
use std::rc::Rc;

/// One rule application, as recorded by a step-recording
/// [`Canonicalizer`](crate::Canonicalizer).
#[derive(Debug, Clone)]
pub struct Step<V = Rational> {
    pub rule_name: &'static str,
    pub description: &'static str,
    pub before: Rc<Node<V>>,
    pub after: Rc<Node<V>>,
}

impl<V: formula_ast::Value> fmt::Display for Step<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  [{}]: {} -> {}",
            self.description, self.rule_name, self.before, self.after
        )
    }
}
