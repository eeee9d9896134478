//! Prefix (Polish) notation output.
//!
//! `+ 3 -- 2` for `3 + (-2)`: operator first, operands separated by single
//! spaces. The parser accepts everything written here.

use crate::node::Node;
use crate::value::Value;
use std::fmt;

impl<V: Value> Node<V> {
    pub fn to_polish(&self) -> String {
        self.to_string()
    }
}

impl<V: Value> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "invalid formula: '{:?}'", self);
        }
        match self {
            Node::Leaf(value) => write!(f, "{}", value),
            Node::Unary(op, operand) => write!(f, "{} {}", op.symbol(), operand),
            Node::Binary(op, lhs, rhs) => write!(f, "{} {} {}", op.symbol(), lhs, rhs),
        }
    }
}
