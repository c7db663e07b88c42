//! Comment mask: `//` line comments and `/* */` block comments.
//!
//! The scan runs over the original text, so comment markers inside string
//! literals never open a comment and string content is left untouched.

use crate::spans::{replace_lexemes, tag_lexemes};
use jsmask_core::tags::{TagMap, TagStyle};
use jsmask_scanner::{Lexeme, LexemeKind, Scanner};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

lazy_static! {
    static ref TRAILING_WHITESPACE: Regex = Regex::new(r"(?mR)[ \t]+$").unwrap();
    static ref BLANK_LINE_RUNS: Regex = Regex::new(r"(?:\r?\n){3,}").unwrap();
}

/// Call `f` with each comment in `text`, delimiters included, in source
/// order. Line comments exclude their line break.
pub fn for_each_comment<F>(text: &str, mut f: F)
where
    F: FnMut(&str),
{
    for lexeme in Scanner::new(text).filter(|l| l.kind.is_comment()) {
        f(lexeme.text(text));
    }
}

/// Collect every comment in `text`.
pub fn comments(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    for_each_comment(text, |full| result.push(full.to_string()));
    result
}

/// The position and kind of every comment in `text`.
pub fn comment_spans(text: &str) -> Vec<Lexeme> {
    Scanner::new(text).filter(|l| l.kind.is_comment()).collect()
}

/// Replace each comment with the output of `f`.
pub fn replace_comments<F>(text: &str, f: F) -> String
where
    F: FnMut(&str) -> String,
{
    replace_lexemes(text, LexemeKind::is_comment, f)
}

/// Replace each comment with `/* AUTO_COMMENT_<n> */`.
pub fn tag_comments(text: &str) -> (String, TagMap) {
    let (tagged, tags) = tag_lexemes(text, LexemeKind::is_comment, TagStyle::Comment);
    trace!(count = tags.len(), "tagged comments");
    (tagged, tags)
}

/// Put tagged comments back into `text`.
pub fn untag_comments(text: &str, tags: &TagMap) -> String {
    debug_assert_eq!(tags.style(), TagStyle::Comment);
    tags.restore(text)
}

/// Remove every comment and tidy the result.
///
/// Trailing spaces and tabs are stripped from each line. With
/// `collapse_blank_lines`, runs of two or more blank lines shrink to one.
/// Leading and trailing whitespace of the whole text is trimmed and a
/// single `\n` is appended.
pub fn uncomment(text: &str, collapse_blank_lines: bool) -> String {
    let stripped = replace_comments(text, |_| String::new());
    let trimmed = TRAILING_WHITESPACE.replace_all(&stripped, "");
    let collapsed: Cow<'_, str> = if collapse_blank_lines {
        BLANK_LINE_RUNS.replace_all(&trimmed, "\n\n")
    } else {
        Cow::Borrowed(trimmed.as_ref())
    };
    let mut result = collapsed.trim().to_string();
    result.push('\n');
    result
}
