use crate::canonicalizer::Canonicalizer;
use crate::rule::{Rewrite, Rule};
use formula_ast::{Node, Operator, Value};
use std::rc::Rc;

/// Pairwise merge template: `(wl a) combine (wr b)` -> `wrap(a inner b)`.
///
/// A `None` wrapper on an operand means the operand is taken as it is; a
/// `None` result wrapper means the merged node is not wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseRule {
    pub name: &'static str,
    pub description: &'static str,
    pub wrap_left: Option<Operator>,
    pub combine: Operator,
    pub wrap_right: Option<Operator>,
    pub result_wrap: Option<Operator>,
    pub inner: Operator,
}

// Operand under the expected wrapper, if the wrapper is there
fn unwrap_operand<V>(node: &Rc<Node<V>>, wrap: Option<Operator>) -> Option<&Rc<Node<V>>> {
    match (wrap, node.as_ref()) {
        (None, _) => Some(node),
        (Some(expected), Node::Unary(op, operand)) if *op == expected => Some(operand),
        _ => None,
    }
}

impl Rule for PairwiseRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply<V: Value>(
        &self,
        canon: &mut Canonicalizer<V>,
        node: &Rc<Node<V>>,
    ) -> Option<Rewrite<V>> {
        let Node::Binary(op, lhs, rhs) = node.as_ref() else {
            return None;
        };
        if *op != self.combine {
            return None;
        }
        let a = unwrap_operand(lhs, self.wrap_left)?;
        let b = unwrap_operand(rhs, self.wrap_right)?;

        let merged = Rc::new(Node::Binary(
            self.inner,
            canon.canonicalize_subtree(a),
            canon.canonicalize_subtree(b),
        ));
        let new_node = match self.result_wrap {
            Some(wrap) => Rc::new(Node::Unary(wrap, canon.canonicalize_subtree(&merged))),
            None => merged,
        };
        Some(Rewrite::new(new_node, self.description))
    }
}

const fn pairwise(
    name: &'static str,
    description: &'static str,
    wrap_left: Option<Operator>,
    combine: Operator,
    wrap_right: Option<Operator>,
    result_wrap: Option<Operator>,
    inner: Operator,
) -> PairwiseRule {
    PairwiseRule {
        name,
        description,
        wrap_left,
        combine,
        wrap_right,
        result_wrap,
        inner,
    }
}

const NEG: Option<Operator> = Some(Operator::Neg);
const SQRT: Option<Operator> = Some(Operator::Sqrt);

/// Applied in this order, each rule seeing the previous rule's output.
#[rustfmt::skip]
pub const PAIRWISE_RULES: [PairwiseRule; 12] = [
    pairwise("Add Negated", "a + (--b) = a - b", None, Operator::Add, NEG, None, Operator::Sub),
    pairwise("Subtract Negated", "a - (--b) = a + b", None, Operator::Sub, NEG, None, Operator::Add),
    pairwise("Negated Minuend", "(--a) - b = --(a + b)", NEG, Operator::Sub, None, NEG, Operator::Add),
    pairwise("Negated Addend", "(--a) + b = --(a - b)", NEG, Operator::Add, None, NEG, Operator::Sub),
    pairwise("Product of Negations", "(--a) * (--b) = a * b", NEG, Operator::Mul, NEG, None, Operator::Mul),
    pairwise("Quotient of Negations", "(--a) / (--b) = a / b", NEG, Operator::Div, NEG, None, Operator::Div),
    pairwise("Negated Left Factor", "(--a) * b = --(a * b)", NEG, Operator::Mul, None, NEG, Operator::Mul),
    pairwise("Negated Dividend", "(--a) / b = --(a / b)", NEG, Operator::Div, None, NEG, Operator::Div),
    pairwise("Negated Right Factor", "a * (--b) = --(a * b)", None, Operator::Mul, NEG, NEG, Operator::Mul),
    pairwise("Negated Divisor", "a / (--b) = --(a / b)", None, Operator::Div, NEG, NEG, Operator::Div),
    pairwise("Product of Roots", "sqrt a * sqrt b = sqrt (a * b)", SQRT, Operator::Mul, SQRT, SQRT, Operator::Mul),
    pairwise("Quotient of Roots", "sqrt a / sqrt b = sqrt (a / b)", SQRT, Operator::Div, SQRT, SQRT, Operator::Div),
];
