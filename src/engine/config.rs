// Configuration for the tokenizer engine and the command-line front end

/// Locale used when none is configured; mirrors the US word instance of the
/// reference engine.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// Word-breaking locale (default "en-US").
    ///
    /// Only the default rule set exists, so this accepts a handful of aliases
    /// for it; anything else makes construction fail.
    pub locale: String,
}

impl TokenizerConfig {
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Output configuration for the binary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Print `start..end` byte offsets next to each token (default false)
    pub show_offsets: bool,
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub output: OutputConfig,
}
