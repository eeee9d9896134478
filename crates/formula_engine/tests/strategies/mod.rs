use formula_ast::{Node, Operator, Rational};
use proptest::prelude::*;
use std::rc::Rc;

fn unary(op: Operator, x: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Unary(op, x))
}

fn binary(op: Operator, l: Rc<Node>, r: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Binary(op, l, r))
}

pub fn arb_rational() -> impl Strategy<Value = Rational> {
    prop_oneof![
        4 => (-10i64..10).prop_map(Rational::from),
        1 => (-10i64..10, 1i64..5).prop_map(|(n, d)| {
            Rational::new(n, d).expect("denominator is never zero")
        }),
    ]
}

/// Formula trees of bounded depth. Powers get small literal exponents and
/// factorials are bounded by the value type, so evaluation stays cheap.
pub fn arb_node() -> impl Strategy<Value = Rc<Node>> {
    let leaf = arb_rational().prop_map(Node::leaf);

    leaf.prop_recursive(
        5,  // levels deep
        64, // max size
        2,  // items per collection
        |inner| {
            prop_oneof![
                1 => (inner.clone(), inner.clone()).prop_map(|(l, r)| binary(Operator::Add, l, r)),
                1 => (inner.clone(), inner.clone()).prop_map(|(l, r)| binary(Operator::Sub, l, r)),
                1 => (inner.clone(), inner.clone()).prop_map(|(l, r)| binary(Operator::Mul, l, r)),
                1 => (inner.clone(), inner.clone()).prop_map(|(l, r)| binary(Operator::Div, l, r)),
                1 => (inner.clone(), -3i64..5)
                    .prop_map(|(b, e)| binary(Operator::Pow, b, Node::integer(e))),
                1 => (inner.clone(), -3i64..5).prop_map(|(b, e)| {
                    let exponent = unary(Operator::Neg, Node::integer(e));
                    binary(Operator::Pow, b, exponent)
                }),
                3 => inner.clone().prop_map(|x| unary(Operator::Neg, x)),
                1 => inner.clone().prop_map(|x| unary(Operator::Sqrt, x)),
                1 => inner.clone().prop_map(|x| unary(Operator::Factorial, x)),
            ]
        },
    )
}
