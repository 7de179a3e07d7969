//! JAF (Just Another Formatter): a permissive reindenter for JSON-ish text.
//!
//! JAF does not parse JSON. It splits the input into tokens with a single
//! text-scanning alternation and prints one token per line at a running
//! indentation offset. Nothing is validated: malformed input degrades
//! silently, characters no token arm matches are dropped, and unbalanced
//! nesting produces cosmetically wrong but never crashing output. Newlines
//! in the input are ordinary characters to the scanner, so compact
//! single-line documents are the intended diet; feeding reflowed output
//! back in is not stable.
//!
//! # Formatting Pipeline
//!
//! The formatter operates in two phases:
//!
//! 1. **Scanner**: Splits the raw text into a lazy token stream, skipping
//!    anything the alternation does not match.
//!
//! 2. **Indenter**: Prints each token on its own line, shrinking the
//!    offset before `}`/`]` lines and growing it after `{`/`[` lines.

mod error;
mod indent;
mod scanner;

pub use error::{FormatError, Result};
pub use indent::{Indenter, INDENT_STEP};
pub use scanner::{scan, Tokens};

/// Reindent a JSON-ish stream into a new string.
///
/// # Example
///
/// ```
/// use libjaf::reindent;
///
/// assert_eq!(reindent("[1,2,3]"), "[\n    1,2,3\n]\n");
/// ```
pub fn reindent(input: &str) -> String {
    let mut out = String::new();
    let mut indenter = Indenter::new();
    for token in scanner::scan(input) {
        indenter.push_token(&mut out, token);
    }
    out
}

/// Reindent a JSON-ish stream into an [`std::io::Write`] sink.
///
/// Content never fails; the only error path is the sink's, propagated as
/// [`FormatError::Io`].
pub fn reindent_to<W: std::io::Write>(input: &str, out: &mut W) -> Result<()> {
    let mut indenter = Indenter::new();
    for token in scanner::scan(input) {
        indenter.write_token(out, token)?;
    }
    Ok(())
}
