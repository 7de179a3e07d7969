//! Phase 2: Indenter
//!
//! The indenter prints one token per line at a running offset. The offset
//! shrinks before a line starting with `}` or `]` (so the closer lands at
//! the parent's level) and grows after a line starting with `{` or `[`
//! (so the children land one level deeper). There is no nesting stack;
//! the offset is the only state.

use std::io::Write;

use crate::error::Result;

/// Spaces added or removed per nesting-delimiter line.
pub const INDENT_STEP: i32 = 4;

/// The offset register for one formatting pass.
///
/// The register is signed: unbalanced input (an extra `}` or `]`) drives it
/// below zero, and later delimiters keep adjusting from there so a
/// re-balancing `{` lines back up. Printing clamps the pad at column zero.
#[derive(Debug, Default)]
pub struct Indenter {
    offset: i32,
}

impl Indenter {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    /// Current offset in spaces. Negative once closers outnumber openers.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Append one token to `out` as its own line at the current offset.
    ///
    /// Only the token's first character matters for the offset; there is no
    /// lookahead and no reordering.
    pub fn push_token(&mut self, out: &mut String, token: &str) {
        let first = token.chars().next();
        if matches!(first, Some('}' | ']')) {
            self.offset -= INDENT_STEP;
        }
        for _ in 0..self.offset.max(0) {
            out.push(' ');
        }
        out.push_str(token);
        out.push('\n');
        if matches!(first, Some('{' | '[')) {
            self.offset += INDENT_STEP;
        }
    }

    /// Write one token to a sink as its own line at the current offset.
    ///
    /// Token handling cannot fail; the only error path is the sink.
    pub fn write_token<W: Write>(&mut self, out: &mut W, token: &str) -> Result<()> {
        let mut line = String::new();
        self.push_token(&mut line, token);
        out.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> String {
        let mut out = String::new();
        let mut indenter = Indenter::new();
        for token in tokens {
            indenter.push_token(&mut out, token);
        }
        out
    }

    #[test]
    fn test_plain_token_prints_at_current_offset() {
        assert_eq!(run(&["a"]), "a\n");
    }

    #[test]
    fn test_open_brace_indents_following_lines() {
        assert_eq!(run(&["{", "x", "}"]), "{\n    x\n}\n");
    }

    #[test]
    fn test_close_aligns_with_parent_level() {
        assert_eq!(
            run(&["{", "{", "x", "}", "}"]),
            "{\n    {\n        x\n    }\n}\n"
        );
    }

    #[test]
    fn test_closer_with_comma_still_dedents() {
        assert_eq!(
            run(&["[", "{", "},", "{", "}", "]"]),
            "[\n    {\n    },\n    {\n    }\n]\n"
        );
    }

    #[test]
    fn test_bracket_steps_match_brace_steps() {
        assert_eq!(run(&["[", "1,2,3", "]"]), "[\n    1,2,3\n]\n");
    }

    #[test]
    fn test_extra_close_clamps_pad_without_panicking() {
        let mut out = String::new();
        let mut indenter = Indenter::new();
        for token in ["{", "}", "}", "{"] {
            indenter.push_token(&mut out, token);
        }
        assert_eq!(out, "{\n}\n}\n{\n");
        assert_eq!(indenter.offset(), 0);
    }

    #[test]
    fn test_offset_goes_negative_after_unmatched_close() {
        let mut indenter = Indenter::new();
        let mut out = String::new();
        indenter.push_token(&mut out, "]");
        assert_eq!(indenter.offset(), -INDENT_STEP);
        assert_eq!(out, "]\n");
    }

    #[test]
    fn test_write_token_matches_push_token() {
        let mut sink = Vec::new();
        let mut indenter = Indenter::new();
        for token in ["{", "\"a\":1", "}"] {
            indenter.write_token(&mut sink, token).unwrap();
        }
        assert_eq!(sink, b"{\n    \"a\":1\n}\n");
    }
}
