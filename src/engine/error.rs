use thiserror::Error;

/// Failure kinds surfaced by a tokenize call.
///
/// All of them abort the call: a caller never receives tokens alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The word-break rule engine could not be built for the configured locale.
    #[error("Failed to create word break engine: {0}")]
    Initialization(String),

    /// The word-character rule could not be compiled.
    #[error("Failed to compile Unicode regex: {0}")]
    PatternCompilation(String),

    /// Host input could not be decoded losslessly (e.g. an unpaired UTF-16 surrogate).
    #[error("Invalid input text: {0}")]
    InvalidInput(String),
}

impl TokenizeError {
    /// Short label for the stage that failed, used in log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            TokenizeError::Initialization(_) => "boundary_scanner",
            TokenizeError::PatternCompilation(_) => "token_classifier",
            TokenizeError::InvalidInput(_) => "input",
        }
    }
}
