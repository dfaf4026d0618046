use tracing::{debug, trace, warn};

use super::boundary::WordBreakEngine;
use super::classifier::TokenClassifier;
use super::collector::TokenCollector;
use super::token::{Segment, Token};
use crate::engine::{TokenizeError, TokenizerConfig};
use crate::input::decode_utf16;

/// Splits text into word tokens.
///
/// Construction does all fallible setup; once built, tokenizing cannot fail.
/// The tokenizer is immutable and every call scans with its own cursor, so a
/// single instance may be shared across threads.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    engine: WordBreakEngine,
    classifier: TokenClassifier,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Result<Self, TokenizeError> {
        let engine = WordBreakEngine::new(&config.locale)
            .inspect_err(|err| warn!(stage = err.stage(), "{err}"))?;
        let classifier =
            TokenClassifier::new().inspect_err(|err| warn!(stage = err.stage(), "{err}"))?;

        debug!(locale = engine.locale(), "tokenizer ready");
        Ok(Self { engine, classifier })
    }

    pub fn with_default_config() -> Result<Self, TokenizeError> {
        Self::new(&TokenizerConfig::default())
    }

    pub fn locale(&self) -> &str {
        self.engine.locale()
    }

    /// Returns the word tokens of `text` in order of appearance.
    ///
    /// ```
    /// use wordsplit::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::with_default_config().unwrap();
    /// assert_eq!(tokenizer.tokenize("Hello, world!"), vec!["Hello", "world"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.collect(text, |segment| segment.text.to_string())
    }

    /// Like [`tokenize`](Self::tokenize) but keeps each token's byte span.
    pub fn tokenize_spans(&self, text: &str) -> Vec<Token> {
        self.collect(text, |segment| Token::from(segment))
    }

    /// Tokenizes UTF-16 code units, treating surrogate pairs as one code point.
    pub fn tokenize_utf16(&self, units: &[u16]) -> Result<Vec<String>, TokenizeError> {
        let text = decode_utf16(units)?;
        Ok(self.tokenize(&text))
    }

    fn collect<T>(&self, text: &str, to_token: impl Fn(Segment<'_>) -> T) -> Vec<T> {
        let mut collector = TokenCollector::new();
        let mut segments = 0usize;

        for segment in self.engine.scan(text).segments() {
            segments += 1;
            if self.classifier.is_token(segment.text) {
                collector.push(to_token(segment));
            }
        }

        trace!(
            bytes = text.len(),
            segments,
            tokens = collector.len(),
            "tokenized text"
        );
        collector.finish()
    }
}

/// Tokenizes `text` with a freshly built default tokenizer.
pub fn tokenize(text: &str) -> Result<Vec<String>, TokenizeError> {
    Ok(Tokenizer::with_default_config()?.tokenize(text))
}

/// Tokenizes `text` with a freshly built default tokenizer, keeping spans.
pub fn tokenize_spans(text: &str) -> Result<Vec<Token>, TokenizeError> {
    Ok(Tokenizer::with_default_config()?.tokenize_spans(text))
}
