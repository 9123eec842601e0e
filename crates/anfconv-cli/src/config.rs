//! CLI configuration.

use anfconv_format::Options;

/// Log filter used when no `-v` flag is given.
pub const LOG_ENV: &str = "ANFCONV_LOG";
pub const SENTINEL_ENV: &str = "ANFCONV_SAT_SENTINEL";
pub const PREFIX_ENV: &str = "ANFCONV_SAT_PREFIX";
pub const STRICT_ENV: &str = "ANFCONV_STRICT";

/// CLI configuration loaded from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Sentinel token for the constant term in ANF-SAT files.
    pub sentinel: Option<String>,
    /// Prefix of variables synthesized when reading ANF-SAT files.
    pub synthetic_prefix: Option<String>,
    /// Fail on header count mismatches.
    pub strict: bool,
}

impl CliConfig {
    /// Loads configuration from environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            sentinel: non_empty(SENTINEL_ENV),
            synthetic_prefix: non_empty(PREFIX_ENV),
            strict: non_empty(STRICT_ENV).is_some_and(|v| {
                matches!(
                    v.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                )
            }),
        }
    }

    /// Conversion options with these overrides applied over the defaults.
    pub fn options(&self) -> Options {
        let mut options = Options::default().strict(self.strict);
        if let Some(sentinel) = &self.sentinel {
            options = options.with_sentinel(sentinel.trim());
        }
        if let Some(prefix) = &self.synthetic_prefix {
            options = options.with_synthetic_prefix(prefix.trim());
        }
        options
    }
}
