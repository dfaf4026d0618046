pub mod config;
pub mod error;

pub use config::{Config, OutputConfig, TokenizerConfig, DEFAULT_LOCALE};
pub use error::TokenizeError;
