//! Parser configuration.

/// What a top-level parse does with text left over after one complete
/// formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrailingInput {
    /// Leftover non-whitespace text is a `ParseErrorKind::TrailingInput` error
    #[default]
    Reject,

    /// Leftover text is dropped silently
    Ignore,
}

/// Deepest operator nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub trailing: TrailingInput,
    /// Formulas nested deeper than this are a `ParseErrorKind::TooDeep`
    /// error. A lone literal has depth 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            trailing: TrailingInput::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn lenient() -> Self {
        ParseOptions {
            trailing: TrailingInput::Ignore,
            ..Self::default()
        }
    }
}
