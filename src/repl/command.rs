/// Commands that can be parsed from REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the session
    Quit,

    /// Show help information
    Help,

    /// Toggle printing of byte offsets next to tokens
    ToggleOffsets,

    /// Tokenize the contents of a file
    LoadFile(String),

    /// Tokenize the line itself
    Tokenize(String),

    /// Unknown `:` command
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  :q, :quit      leave the session
  :h, :help      show this help
  :offsets       toggle byte offsets in the output
  @path          tokenize the contents of a file
  <text>         tokenize the line itself";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        for needle in [":quit", ":help", ":offsets", "@path"] {
            assert!(HELP_TEXT.contains(needle), "help is missing {needle}");
        }
    }
}
