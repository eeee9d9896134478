pub mod canonicalizer;
pub mod error;
pub mod eval;
pub mod options;
pub mod rule;
pub mod rules;
pub mod step;

pub use canonicalizer::{canonicalize, Canonicalizer};
pub use error::EvalError;
pub use eval::evaluate;
pub use options::CanonicalizeOptions;
pub use rule::{Rewrite, Rule};
pub use step::Step;
