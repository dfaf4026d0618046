//! REPL (Read-Eval-Print Loop) module
//!
//! Line-oriented interactive tokenizing for the `wordsplit --repl` binary.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and help text
//! - **parser.rs**: Manual string parsing for `@` and `:` prefixes
//! - **session.rs**: Executes commands against one tokenizer

pub mod command;
pub mod parser;
pub mod session;

// Re-export public types
pub use command::ReplCommand;
pub use parser::parse_repl_input;
pub use session::ReplSession;
