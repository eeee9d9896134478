use formula_ast::{ArithmeticError, Operator};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{input}' at offset {offset}: {kind}")]
pub struct ParseError {
    /// The text handed to the parser, untrimmed
    pub input: String,
    /// Byte offset into `input` where the failure was detected
    pub offset: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("empty input where an operand was expected")]
    EmptyInput,

    #[error("unrecognized operator in '{0}'")]
    UnrecognizedOperator(String),

    #[error("first operand missing after '{0}'")]
    FirstOperandMissing(Operator),

    #[error("second operand missing for '{operator}'")]
    SecondOperandMissing {
        operator: Operator,
        #[source]
        cause: Box<ParseErrorKind>,
    },

    #[error("invalid literal '{literal}': {source}")]
    InvalidLiteral {
        literal: String,
        #[source]
        source: ArithmeticError,
    },

    #[error("unconsumed input '{0}'")]
    TrailingInput(String),

    #[error("formula nested deeper than {0} levels")]
    TooDeep(usize),
}
