use tracing::debug;
use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use super::token::{Segment, Span};
use crate::engine::TokenizeError;

/// Locale identifiers that resolve to the default UAX #29 word rules.
const SUPPORTED_LOCALES: &[&str] = &["en-US", "en_US", "en", "und", "root"];

/// Word-break rule engine for one locale.
///
/// Holds no cursor state, so one engine can serve any number of scans,
/// including concurrent ones; every [`scan`](Self::scan) gets its own cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBreakEngine {
    locale: String,
}

impl WordBreakEngine {
    pub fn new(locale: &str) -> Result<Self, TokenizeError> {
        let supported = SUPPORTED_LOCALES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(locale));

        if !supported {
            return Err(TokenizeError::Initialization(format!(
                "no word break rules for locale '{locale}'"
            )));
        }

        debug!(locale, "word break engine ready");
        Ok(Self {
            locale: locale.to_string(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Starts a boundary scan over `text`.
    pub fn scan<'a>(&self, text: &'a str) -> BoundaryScanner<'a> {
        BoundaryScanner {
            text,
            bounds: text.split_word_bound_indices(),
            started: false,
        }
    }
}

/// Cursor over the word boundaries of one text.
///
/// Yields byte offsets in strictly increasing order: `0` first (for non-empty
/// text), then the end of each word-break segment, finishing at `text.len()`.
/// Exhaustion is `None`, never a magic offset.
pub struct BoundaryScanner<'a> {
    text: &'a str,
    bounds: UWordBoundIndices<'a>,
    started: bool,
}

impl<'a> BoundaryScanner<'a> {
    /// Pairs consecutive boundaries into segments.
    pub fn segments(self) -> Segments<'a> {
        Segments {
            text: self.text,
            boundaries: self,
            previous: None,
        }
    }
}

impl Iterator for BoundaryScanner<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.started {
            self.started = true;
            if !self.text.is_empty() {
                return Some(0);
            }
        }

        self.bounds
            .next()
            .map(|(start, piece)| start + piece.len())
    }
}

/// Iterator of [`Segment`]s, every span of the text exactly once and in order.
pub struct Segments<'a> {
    text: &'a str,
    boundaries: BoundaryScanner<'a>,
    previous: Option<usize>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let start = match self.previous {
            Some(offset) => offset,
            None => self.boundaries.next()?,
        };
        let end = self.boundaries.next()?;
        self.previous = Some(end);

        Some(Segment {
            span: Span::new(start, end),
            text: &self.text[start..end],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(text: &str) -> Vec<usize> {
        WordBreakEngine::new("en-US").unwrap().scan(text).collect()
    }

    #[test]
    fn test_boundaries_of_two_words() {
        assert_eq!(boundaries("the quick"), vec![0, 3, 4, 9]);
    }

    #[test]
    fn test_boundaries_with_surrounding_spaces() {
        assert_eq!(boundaries(" foo bar "), vec![0, 1, 4, 5, 8, 9]);
    }

    #[test]
    fn test_empty_text_has_no_boundaries() {
        assert!(boundaries("").is_empty());
    }

    #[test]
    fn test_scan_stays_exhausted() {
        let engine = WordBreakEngine::new("en-US").unwrap();
        let mut scanner = engine.scan("ab");
        assert_eq!(scanner.next(), Some(0));
        assert_eq!(scanner.next(), Some(2));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_boundaries_are_char_aligned_for_multibyte_text() {
        // 'é' is two bytes in UTF-8
        let text = "café 42";
        let offsets = boundaries(text);
        assert_eq!(offsets, vec![0, 5, 6, 8]);
        assert!(offsets.iter().all(|&offset| text.is_char_boundary(offset)));
    }

    #[test]
    fn test_astral_characters_are_single_units() {
        // U+1F600 sits outside the BMP (a surrogate pair in UTF-16)
        assert_eq!(boundaries("a\u{1F600}b"), vec![0, 1, 5, 6]);
    }

    #[test]
    fn test_long_whitespace_terminates() {
        let text = " \t\n".repeat(10_000);
        let offsets = boundaries(&text);
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&text.len()));
    }

    #[test]
    fn test_segments_cover_text() {
        let engine = WordBreakEngine::new("en-US").unwrap();
        let segments: Vec<&str> = engine
            .scan("Hello, world!")
            .segments()
            .map(|segment| segment.text)
            .collect();
        assert_eq!(segments, vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_locale_aliases_accepted() {
        for locale in ["en-US", "en_us", "EN", "und", "root"] {
            assert!(WordBreakEngine::new(locale).is_ok(), "{locale} rejected");
        }
    }

    #[test]
    fn test_unknown_locale_fails_initialization() {
        let result = WordBreakEngine::new("xx-YY");
        assert!(matches!(
            result,
            Err(TokenizeError::Initialization(msg)) if msg.contains("xx-YY")
        ));
    }
}
