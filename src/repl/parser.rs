use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - `:offsets` → ToggleOffsets command
/// - `@filename` → Load file command
/// - anything else → tokenize the line as-is
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let trimmed = input.trim();

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            "offsets" => ReplCommand::ToggleOffsets,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        }
    } else if let Some(rest) = trimmed.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            ReplCommand::Unknown(trimmed.to_string())
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        // Raw line so offsets match what was typed
        ReplCommand::Tokenize(input.trim_end_matches(['\r', '\n']).to_string())
    }
}
