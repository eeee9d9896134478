use crate::error::ArithmeticError;
use crate::operator::Operator;
use std::fmt;

/// Contract for anything that can sit in a leaf and be combined by the
/// formula operators.
///
/// Equality and ordering are the value's own (numeric) ones. `Display` must
/// produce text that [`Value::from_literal`] accepts back, since the
/// serializer writes leaves with it.
pub trait Value: Clone + fmt::Debug + fmt::Display + Eq + Ord {
    /// Builds a value from a literal token such as `-3` or `7/2`.
    fn from_literal(text: &str) -> Result<Self, ArithmeticError>;

    fn from_integer(n: i64) -> Self;

    fn apply_unary(&self, op: Operator) -> Result<Self, ArithmeticError>;

    fn apply_binary(&self, op: Operator, rhs: &Self) -> Result<Self, ArithmeticError>;

    // Predicates used by rewrite-rule guards.
    fn is_integer(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn is_even(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
    fn is_minus_one(&self) -> bool;
}
