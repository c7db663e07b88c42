//! Closing-quote search for quoted literals.

use crate::char_codes::{is_quote, BACKSLASH};
use memchr::memchr;

/// Find the index of the quote that closes the literal opened at `start`.
///
/// `start` must index a `'`, `"` or backtick. The search looks for the next
/// occurrence of the same quote; a candidate directly preceded by a backslash
/// is escaped and the search resumes just past it. Returns `None` when the
/// literal is unterminated (or `start` is not a quote).
///
/// Backslash runs are not counted: in `"a\\"` the final quote follows a
/// backslash and is treated as escaped, even though the backslash is itself
/// escaped.
pub fn index_of_closing_quote(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let quote = *bytes.get(start)?;
    if !is_quote(quote) {
        return None;
    }
    let mut from = start + 1;
    loop {
        let found = from + memchr(quote, bytes.get(from..)?)?;
        if bytes[found - 1] != BACKSLASH {
            return Some(found);
        }
        from = found + 1;
    }
}
