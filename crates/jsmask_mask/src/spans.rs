//! Span substitution shared by every mask.

use jsmask_core::tags::{TagMap, TagStyle};
use jsmask_scanner::{LexemeKind, Scanner};
use std::ops::Range;

/// Rebuild `text`, replacing each range with its paired replacement.
///
/// Ranges must be ordered and non-overlapping. Text between ranges is
/// copied verbatim.
pub fn replace_ranges<I>(text: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (Range<usize>, String)>,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for (range, replacement) in replacements {
        debug_assert!(range.start >= last, "replacement ranges overlap");
        result.push_str(&text[last..range.start]);
        result.push_str(&replacement);
        last = range.end;
    }
    result.push_str(&text[last..]);
    result
}

/// Replace every lexeme whose kind passes `keep` with the output of `f`.
pub(crate) fn replace_lexemes<K, F>(text: &str, keep: K, mut f: F) -> String
where
    K: Fn(LexemeKind) -> bool,
    F: FnMut(&str) -> String,
{
    let replacements = Scanner::new(text)
        .filter(|lexeme| keep(lexeme.kind))
        .map(|lexeme| (lexeme.span.to_range(), f(lexeme.text(text))));
    replace_ranges(text, replacements)
}

/// Replace every lexeme whose kind passes `keep` with a fresh placeholder.
pub(crate) fn tag_lexemes<K>(text: &str, keep: K, style: TagStyle) -> (String, TagMap)
where
    K: Fn(LexemeKind) -> bool,
{
    let mut tags = TagMap::new(style);
    let tagged = replace_lexemes(text, keep, |full| tags.tag(full));
    (tagged, tags)
}
