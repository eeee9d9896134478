//! The fixed rule set of the canonicalizer.
//!
//! Two root-level special cases are tried first, then the pairwise-merge
//! table, then the re-association table, each entry in table order.

pub mod pairwise;
pub mod reassociate;
pub mod special;

pub use pairwise::{PairwiseRule, PAIRWISE_RULES};
pub use reassociate::{ReassociateRule, REASSOCIATE_RULES};
pub use special::{DoubleNegationRule, EvenPowerOfNegationRule};
