//! Unicode word tokenizer.
//!
//! Splits text at UAX #29 word boundaries and keeps the segments that contain
//! at least one word character (a letter, mark, digit or connector such as
//! `_`). Whitespace and punctuation segments are dropped.
//!
//! ```
//! let tokens = wordsplit::tokenize("The cat's meowed 1,000 times! Really!").unwrap();
//! assert_eq!(tokens, ["The", "cat's", "meowed", "1,000", "times", "Really"]);
//! ```

pub mod engine;
pub mod input;
pub mod output;
pub mod repl;
pub mod segment;

pub use engine::{Config, OutputConfig, TokenizeError, TokenizerConfig};
pub use segment::{tokenize, tokenize_spans, Span, Token, Tokenizer};
