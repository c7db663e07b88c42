//! Tagged views of a source text for pattern-based extraction.

use crate::comments::tag_comments;
use crate::strings::tag_strings;
use jsmask_core::tags::TagMap;

/// A source text with its literals (and optionally comments) replaced by
/// placeholders, plus the maps needed to undo the replacement.
///
/// Patterns run against [`MaskedSource::text`] can never match inside a
/// string or comment. Matched fragments are turned back into real source
/// with [`MaskedSource::restore`].
#[derive(Debug, Clone)]
pub struct MaskedSource {
    text: String,
    strings: TagMap,
    comments: Option<TagMap>,
}

impl MaskedSource {
    /// Tag string literals only. Comments stay visible.
    pub fn strings_only(source: &str) -> Self {
        let (text, strings) = tag_strings(source);
        Self {
            text,
            strings,
            comments: None,
        }
    }

    /// Tag string literals, then comments.
    pub fn strings_and_comments(source: &str) -> Self {
        let (with_strings, strings) = tag_strings(source);
        let (text, comments) = tag_comments(&with_strings);
        Self {
            text,
            strings,
            comments: Some(comments),
        }
    }

    /// The tagged text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn strings(&self) -> &TagMap {
        &self.strings
    }

    pub fn comments(&self) -> Option<&TagMap> {
        self.comments.as_ref()
    }

    /// Restore the placeholders in `fragment`, comments first, then strings.
    ///
    /// Works for a fragment of the tagged text as well as for the whole text
    /// after it has been edited.
    pub fn restore(&self, fragment: &str) -> String {
        let uncommented = match &self.comments {
            Some(comments) => comments.restore(fragment),
            None => fragment.to_string(),
        };
        self.strings.restore(&uncommented)
    }

    /// The content of the literal behind a string placeholder, without its
    /// delimiters. Anything that is not a known placeholder is unquoted as is.
    pub fn string_value(&self, placeholder: &str) -> String {
        let key = placeholder.trim_matches('"');
        unquote(self.strings.get(key).unwrap_or(placeholder)).to_string()
    }
}

/// Strip the matching delimiters of a quoted literal.
///
/// An unterminated literal loses only its opening quote; text that is not
/// quoted is returned unchanged.
pub fn unquote(literal: &str) -> &str {
    match literal.chars().next() {
        Some(quote @ ('\'' | '"' | '`')) => {
            let inner = &literal[1..];
            inner.strip_suffix(quote).unwrap_or(inner)
        }
        _ => literal,
    }
}
