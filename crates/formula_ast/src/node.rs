use crate::error::ArityError;
use crate::operator::Operator;
use crate::rational::Rational;
use crate::value::Value;
use std::rc::Rc;

/// A formula tree.
///
/// Nodes are immutable once built, so subtrees are freely shared between
/// trees through `Rc`. The variants are public for pattern matching; build
/// nodes through [`Node::unary`] and [`Node::binary`] to get the arity check.
/// A unary node's operand is its left child; it has no right child.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node<V = Rational> {
    Leaf(V),
    Unary(Operator, Rc<Node<V>>),
    Binary(Operator, Rc<Node<V>>, Rc<Node<V>>),
}

impl<V: Value> Node<V> {
    pub fn leaf(value: V) -> Rc<Self> {
        Rc::new(Node::Leaf(value))
    }

    pub fn integer(n: i64) -> Rc<Self> {
        Rc::new(Node::Leaf(V::from_integer(n)))
    }

    pub fn unary(op: Operator, operand: Rc<Node<V>>) -> Result<Rc<Self>, ArityError> {
        if !op.is_unary() {
            return Err(ArityError {
                operator: op,
                expected: op.arity(),
                found: 1,
            });
        }
        Ok(Rc::new(Node::Unary(op, operand)))
    }

    pub fn binary(
        op: Operator,
        lhs: Rc<Node<V>>,
        rhs: Rc<Node<V>>,
    ) -> Result<Rc<Self>, ArityError> {
        if !op.is_binary() {
            return Err(ArityError {
                operator: op,
                expected: op.arity(),
                found: 2,
            });
        }
        Ok(Rc::new(Node::Binary(op, lhs, rhs)))
    }
}

impl<V> Node<V> {
    /// Operator at the root, `None` for a leaf.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Leaf(_) => None,
            Node::Unary(op, _) | Node::Binary(op, _, _) => Some(*op),
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Node::Leaf(v) => Some(v),
            _ => None,
        }
    }

    /// Operand of a unary node, or left operand of a binary one.
    pub fn left(&self) -> Option<&Rc<Node<V>>> {
        match self {
            Node::Leaf(_) => None,
            Node::Unary(_, child) | Node::Binary(_, child, _) => Some(child),
        }
    }

    pub fn right(&self) -> Option<&Rc<Node<V>>> {
        match self {
            Node::Binary(_, _, rhs) => Some(rhs),
            _ => None,
        }
    }

    /// Checks that the operator matches the number of children.
    /// Children are not checked.
    pub fn is_valid(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Unary(op, _) => op.is_unary(),
            Node::Binary(op, _, _) => op.is_binary(),
        }
    }

    /// Distance from this node to its deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Unary(_, child) => child.depth() + 1,
            Node::Binary(_, lhs, rhs) => lhs.depth().max(rhs.depth()) + 1,
        }
    }
}
