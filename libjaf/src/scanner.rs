//! Phase 1: Scanner
//!
//! The scanner splits raw input into a token stream by walking a single
//! alternation across the text. Each token is one of:
//! - a double-quoted string, optionally carrying `: value` and any trailing
//!   run up to the next quote or nesting delimiter
//! - a run of characters free of quotes and nesting delimiters
//! - `{`, or `}` with an optional trailing comma
//! - `[`, or `]` with an optional trailing comma
//! - a run of digits and spaces with an optional trailing comma
//!
//! The arms are tried in that order at each position. Characters no arm
//! matches are skipped; the scanner has no error path.

use std::sync::OnceLock;

use regex::{Matches, Regex};

/// The token alternation, one arm per line, in priority order.
const TOKEN_PATTERN: &str = concat!(
    r#""[^"]*"(?:\s*:\s*(?:[0-9]+|"[^"]*")[^{}\[\]"]*,?)?"#,
    r#"|[^"{}\[\]]+"#,
    r"|\{",
    r"|\},?",
    r"|\[",
    r"|\],?",
    r"|[0-9 ]+,?",
);

fn token_pattern() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

/// Lazy stream of tokens borrowed from the input.
///
/// One pass over the text; finite for finite input. Re-scanning requires
/// calling [`scan`] again.
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Scan input text into a token stream.
pub fn scan(input: &str) -> Tokens<'_> {
    Tokens {
        matches: token_pattern().find_iter(input),
    }
}
