//! Conversion options shared by readers and writers.

/// Token standing for the constant `1` in ANF-SAT clauses.
pub const DEFAULT_SENTINEL: &str = "T";

/// Prefix of the names given to positional ANF-SAT variables on read.
pub const DEFAULT_SYNTHETIC_PREFIX: &str = "x";

/// Tunables for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Constant-term sentinel used by the ANF-SAT format.
    pub sentinel: String,
    /// Prefix for synthesized variable names (`x1`, `x2`, ...).
    pub synthetic_prefix: String,
    /// Treat header count mismatches as errors instead of warnings.
    pub strict_header_counts: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            synthetic_prefix: DEFAULT_SYNTHETIC_PREFIX.to_string(),
            strict_header_counts: false,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    #[must_use]
    pub fn with_synthetic_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.synthetic_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_header_counts = strict;
        self
    }
}
