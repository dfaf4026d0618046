//! Word segmentation pipeline
//!
//! text → [`BoundaryScanner`] → [`Segment`]s → [`TokenClassifier`] → [`TokenCollector`] → tokens
//!
//! - **boundary.rs**: UAX #29 word boundaries as an iterator of byte offsets
//! - **classifier.rs**: keeps segments holding at least one word character
//! - **collector.rs**: ordered accumulation of accepted segments
//! - **tokenizer.rs**: the driving loop and the public entry points

pub mod boundary;
pub mod classifier;
pub mod collector;
pub mod token;
pub mod tokenizer;

pub use boundary::{BoundaryScanner, Segments, WordBreakEngine};
pub use classifier::TokenClassifier;
pub use collector::TokenCollector;
pub use token::{Segment, Span, Token};
pub use tokenizer::{tokenize, tokenize_spans, Tokenizer};
