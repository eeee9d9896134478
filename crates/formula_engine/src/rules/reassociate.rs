use crate::canonicalizer::Canonicalizer;
use crate::rule::{Rewrite, Rule};
use formula_ast::{Node, Operator, Value};
use std::rc::Rc;

/// Re-association template: `a outer (b inner c)` -> `(a new_left b) new_outer c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassociateRule {
    pub name: &'static str,
    pub description: &'static str,
    pub outer: Operator,
    pub inner: Operator,
    pub new_left: Operator,
    pub new_outer: Operator,
}

impl Rule for ReassociateRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<V: Value>(
        &self,
        canon: &mut Canonicalizer<V>,
        node: &Rc<Node<V>>,
    ) -> Option<Rewrite<V>> {
        let Node::Binary(op, a, rhs) = node.as_ref() else {
            return None;
        };
        if *op != self.outer {
            return None;
        }
        let Node::Binary(inner_op, b, c) = rhs.as_ref() else {
            return None;
        };
        if *inner_op != self.inner {
            return None;
        }

        let left = Rc::new(Node::Binary(
            self.new_left,
            canon.canonicalize_subtree(a),
            canon.canonicalize_subtree(b),
        ));
        let new_node = Rc::new(Node::Binary(
            self.new_outer,
            canon.canonicalize_subtree(&left),
            canon.canonicalize_subtree(c),
        ));
        Some(Rewrite::new(new_node, self.description))
    }
}

/// Applied in this order, after the pairwise merges.
///
/// The new operators follow the sign rules: `a - (b - c)` is `(a - b) + c`
/// and `a / (b / c)` is `(a / b) * c`.
pub const REASSOCIATE_RULES: [ReassociateRule; 4] = [
    ReassociateRule {
        name: "Associate Addition",
        description: "a + (b + c) = (a + b) + c",
        outer: Operator::Add,
        inner: Operator::Add,
        new_left: Operator::Add,
        new_outer: Operator::Add,
    },
    ReassociateRule {
        name: "Associate Subtraction",
        description: "a - (b - c) = (a - b) + c",
        outer: Operator::Sub,
        inner: Operator::Sub,
        new_left: Operator::Sub,
        new_outer: Operator::Add,
    },
    ReassociateRule {
        name: "Associate Multiplication",
        description: "a * (b * c) = (a * b) * c",
        outer: Operator::Mul,
        inner: Operator::Mul,
        new_left: Operator::Mul,
        new_outer: Operator::Mul,
    },
    ReassociateRule {
        name: "Associate Division",
        description: "a / (b / c) = (a / b) * c",
        outer: Operator::Div,
        inner: Operator::Div,
        new_left: Operator::Div,
        new_outer: Operator::Mul,
    },
];
