pub mod error;
pub mod options;
pub mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use options::{ParseOptions, TrailingInput, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_prefix, parse_with};
