use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file encoding (expected UTF-8): {0}")]
    InvalidEncoding(String),
}

pub mod file;
pub mod utf16;

pub use file::{load_file, read_stdin};
pub use utf16::decode_utf16;
