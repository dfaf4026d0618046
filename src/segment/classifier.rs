use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::TokenizeError;

/// Unicode word character: letters of any script, decimal digits and
/// connector punctuation such as `_`. Marks and extenders are excluded even
/// when Alphabetic: word breaking glues them onto whatever precedes them,
/// including whitespace.
const WORD_CHARACTER_PATTERN: &str =
    r"[[\p{Alphabetic}\p{Nd}\p{Pc}]--[\p{M}\p{Grapheme_Extend}\p{Join_Control}]]";

lazy_static! {
    static ref WORD_CHARACTER: Result<Regex, TokenizeError> = compile(WORD_CHARACTER_PATTERN);
}

fn compile(pattern: &str) -> Result<Regex, TokenizeError> {
    Regex::new(pattern).map_err(|e| TokenizeError::PatternCompilation(e.to_string()))
}

/// Decides whether a segment is kept as a token.
#[derive(Debug, Clone)]
pub struct TokenClassifier {
    word_character: Regex,
}

impl TokenClassifier {
    /// Fails with [`TokenizeError::PatternCompilation`] if the word-character
    /// rule did not compile; the failure is reported on every attempt.
    pub fn new() -> Result<Self, TokenizeError> {
        let word_character = (*WORD_CHARACTER).clone()?;
        Ok(Self { word_character })
    }

    /// True iff `segment` holds at least one word character. Empty segments
    /// are never tokens.
    pub fn is_token(&self, segment: &str) -> bool {
        self.word_character.is_match(segment)
    }
}
