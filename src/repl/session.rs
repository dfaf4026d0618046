use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::warn;

use super::command::HELP_TEXT;
use super::{parse_repl_input, ReplCommand};
use crate::engine::OutputConfig;
use crate::input::load_file;
use crate::output::write_tokens;
use crate::segment::Tokenizer;

/// Interactive session state: one tokenizer reused for every line.
pub struct ReplSession {
    tokenizer: Tokenizer,
    output: OutputConfig,
}

impl ReplSession {
    pub fn new(tokenizer: Tokenizer, output: OutputConfig) -> Self {
        Self { tokenizer, output }
    }

    /// Run one command. Returns `false` once the session should end.
    pub fn execute<W: Write>(&mut self, command: ReplCommand, out: &mut W) -> io::Result<bool> {
        match command {
            ReplCommand::Quit => return Ok(false),
            ReplCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            ReplCommand::ToggleOffsets => {
                self.output.show_offsets = !self.output.show_offsets;
                let state = if self.output.show_offsets { "on" } else { "off" };
                writeln!(out, "offsets {state}")?;
            }
            ReplCommand::LoadFile(path) => match load_file(Path::new(&path)) {
                Ok(text) => {
                    let tokens = self.tokenizer.tokenize_spans(&text);
                    write_tokens(out, &tokens, &self.output)?;
                }
                Err(err) => {
                    warn!(%path, "{err}");
                    writeln!(out, "error: {err}")?;
                }
            },
            ReplCommand::Tokenize(text) => {
                let tokens = self.tokenizer.tokenize_spans(&text);
                write_tokens(out, &tokens, &self.output)?;
            }
            ReplCommand::Unknown(input) => {
                writeln!(out, "unknown command: {input} (:h for help)")?;
            }
        }
        Ok(true)
    }

    /// Read lines until `:q` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let command = parse_repl_input(&line?);
            if !self.execute(command, out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}
