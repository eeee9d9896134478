use formula_ast::ArithmeticError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Raised by the value type; passed through unchanged
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// A node whose operator does not match its number of children
    #[error("invalid formula {0}")]
    InvalidFormula(String),
}
