// Token printing shared by the one-shot CLI and the REPL
use std::io::{self, Write};

use crate::engine::OutputConfig;
use crate::segment::Token;

/// One token per line, optionally prefixed with `start..end` and a tab.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], config: &OutputConfig) -> io::Result<()> {
    for token in tokens {
        if config.show_offsets {
            writeln!(out, "{}..{}\t{}", token.span.start, token.span.end, token.text)?;
        } else {
            writeln!(out, "{}", token.text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::tokenize_spans;

    fn render(text: &str, show_offsets: bool) -> String {
        let tokens = tokenize_spans(text).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, &OutputConfig { show_offsets }).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(render("café 42_x", false), "café\n42_x\n");
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        assert_eq!(render("café 42_x", true), "0..5\tcafé\n6..10\t42_x\n");
    }

    #[test]
    fn test_no_tokens_prints_nothing() {
        assert_eq!(render("  !!! ", true), "");
    }
}
