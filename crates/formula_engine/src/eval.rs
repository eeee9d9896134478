use crate::error::EvalError;
use formula_ast::{Node, Value};

/// Reduces a formula to a single value.
///
/// Children are evaluated left before right and the first error stops the
/// evaluation; it is returned as raised by the value type.
///
/// Recursion follows the depth of the tree; parsed formulas are bounded by
/// the parser's nesting limit.
pub fn evaluate<V: Value>(node: &Node<V>) -> Result<V, EvalError> {
    if !node.is_valid() {
        return Err(EvalError::InvalidFormula(format!("{:?}", node)));
    }
    match node {
        Node::Leaf(value) => Ok(value.clone()),
        Node::Unary(op, operand) => {
            let value = evaluate(operand)?;
            Ok(value.apply_unary(*op)?)
        }
        Node::Binary(op, lhs, rhs) => {
            let left = evaluate(lhs)?;
            let right = evaluate(rhs)?;
            Ok(left.apply_binary(*op, &right)?)
        }
    }
}
