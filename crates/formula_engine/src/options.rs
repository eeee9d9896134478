//! Canonicalizer configuration.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanonicalizeOptions {
    /// Keep a [`Step`](crate::Step) for every rule application
    pub record_steps: bool,
}
