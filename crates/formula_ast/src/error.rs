//! Error types for formula_ast crate.

use crate::operator::Operator;
use thiserror::Error;

/// Errors raised by a numeric value when an operator cannot be applied.
///
/// Operands are carried in their textual form so that the error type does not
/// depend on the value implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    /// Even root of a negative operand
    #[error("even root of negative value {0}")]
    NegativeRoot(String),

    /// Exact result would not be rational, e.g. `sqrt 2`
    #[error("result of {0} is not rational")]
    IrrationalResult(String),

    /// Factorial of a negative or non-integral operand
    #[error("factorial is undefined for {0}")]
    InvalidFactorial(String),

    #[error("{0} is undefined")]
    Indeterminate(String),

    /// Operand exceeds the bounds the value type is willing to materialize
    #[error("operand {0} is too large")]
    OperandTooLarge(String),

    #[error("invalid numeric literal '{0}'")]
    InvalidLiteral(String),

    #[error("operator '{0}' applied with the wrong number of operands")]
    ArityMismatch(Operator),
}

/// Raised by the checked node constructors when an operator is combined with
/// the wrong number of children.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("operator '{operator}' takes {expected} operand(s), got {found}")]
pub struct ArityError {
    pub operator: Operator,
    pub expected: usize,
    pub found: usize,
}
