use crate::canonicalizer::Canonicalizer;
use crate::eval::evaluate;
use crate::rule::{Rewrite, Rule};
use formula_ast::{Node, Operator, Value};
use std::rc::Rc;
use tracing::debug;

/// `-- -- x` -> `x`
pub struct DoubleNegationRule;

impl Rule for DoubleNegationRule {
    fn name(&self) -> &'static str {
        "Double Negation"
    }

    fn apply<V: Value>(
        &self,
        canon: &mut Canonicalizer<V>,
        node: &Rc<Node<V>>,
    ) -> Option<Rewrite<V>> {
        let Node::Unary(Operator::Neg, inner) = node.as_ref() else {
            return None;
        };
        let Node::Unary(Operator::Neg, x) = inner.as_ref() else {
            return None;
        };
        Some(Rewrite::new(canon.canonicalize_subtree(x), "--(--x) = x"))
    }
}

/// `(-- x) ^ n` -> `x ^ n` when `n` evaluates to an even integer.
///
/// Odd exponents and exponents that fail to evaluate leave the node alone,
/// subtrees included: the canonicalizer stops at any node of this shape the
/// rule declines.
pub struct EvenPowerOfNegationRule;

impl EvenPowerOfNegationRule {
    /// Whether `node` is a power whose base is a negation.
    pub fn guards<V>(node: &Node<V>) -> bool {
        matches!(
            node,
            Node::Binary(Operator::Pow, base, _)
                if matches!(base.as_ref(), Node::Unary(Operator::Neg, _))
        )
    }
}

impl Rule for EvenPowerOfNegationRule {
    fn name(&self) -> &'static str {
        "Even Power of Negation"
    }

    fn apply<V: Value>(
        &self,
        canon: &mut Canonicalizer<V>,
        node: &Rc<Node<V>>,
    ) -> Option<Rewrite<V>> {
        let Node::Binary(Operator::Pow, base, exponent) = node.as_ref() else {
            return None;
        };
        let Node::Unary(Operator::Neg, x) = base.as_ref() else {
            return None;
        };

        match evaluate(exponent) {
            Ok(n) if n.is_even() => {}
            Ok(_) => return None,
            Err(err) => {
                debug!(target: "canonicalize", exponent = %exponent, error = %err, "exponent guard undecidable, rule skipped");
                return None;
            }
        }

        let new_node = Rc::new(Node::Binary(
            Operator::Pow,
            canon.canonicalize_subtree(x),
            canon.canonicalize_subtree(exponent),
        ));
        Some(Rewrite::new(new_node, "(--x)^n = x^n for even n"))
    }
}
