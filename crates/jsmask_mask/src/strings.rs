//! String mask: string and template literals.
//!
//! Comments and regex literals are skipped over and never reported, so a
//! quote inside `// don't` or `/it's/` does not open a string.

use crate::spans::{replace_lexemes, tag_lexemes};
use jsmask_core::tags::{TagMap, TagStyle};
use jsmask_scanner::{Lexeme, LexemeKind, Scanner};
use tracing::trace;

/// The neutral text every string becomes under [`mask_strings`].
pub const MASKED_STRING: &str = "\"AUTO_STRING\"";

/// Call `f` with each string literal in `text`, delimiters included, in
/// source order.
pub fn for_each_string<F>(text: &str, mut f: F)
where
    F: FnMut(&str),
{
    for lexeme in Scanner::new(text).filter(|l| l.kind.is_string()) {
        f(lexeme.text(text));
    }
}

/// Collect every string literal in `text`.
pub fn strings(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    for_each_string(text, |full| result.push(full.to_string()));
    result
}

/// The position and kind of every string literal in `text`.
pub fn string_spans(text: &str) -> Vec<Lexeme> {
    Scanner::new(text).filter(|l| l.kind.is_string()).collect()
}

/// Replace each string literal with the output of `f`.
pub fn replace_strings<F>(text: &str, f: F) -> String
where
    F: FnMut(&str) -> String,
{
    replace_lexemes(text, LexemeKind::is_string, f)
}

/// Replace every string literal with the same neutral literal.
///
/// The result is a read-only view: the original content cannot be restored.
pub fn mask_strings(text: &str) -> String {
    replace_strings(text, |_| MASKED_STRING.to_string())
}

/// Replace each string literal with `"AUTO_STRING_<n>"` and return the
/// tagged text with the mapping needed to restore it.
pub fn tag_strings(text: &str) -> (String, TagMap) {
    let (tagged, tags) = tag_lexemes(text, LexemeKind::is_string, TagStyle::String);
    trace!(count = tags.len(), "tagged string literals");
    (tagged, tags)
}

/// Put tagged string literals back into `text`.
pub fn untag_strings(text: &str, tags: &TagMap) -> String {
    debug_assert_eq!(tags.style(), TagStyle::String);
    tags.restore(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_in_order() {
        let text = r#"a('x'); b("y"); c(`z`);"#;
        assert_eq!(strings(text), vec!["'x'", "\"y\"", "`z`"]);
    }

    #[test]
    fn test_replace_strings_keeps_comments() {
        let text = "f('a') // 'not a string'";
        let result = replace_strings(text, |_| "S".to_string());
        assert_eq!(result, "f(S) // 'not a string'");
    }

    #[test]
    fn test_mask_strings() {
        assert_eq!(mask_strings("a('// x', `y`)"), "a(\"AUTO_STRING\", \"AUTO_STRING\")");
    }

    #[test]
    fn test_string_spans() {
        let spans = string_spans("x('ab') // 'c'");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].span.start, 2);
        assert_eq!(spans[0].span.length, 4);
    }

    #[test]
    fn test_tag_strings() {
        let (tagged, tags) = tag_strings("import x from './x'; const y = \"y\";");
        assert_eq!(tagged, "import x from \"AUTO_STRING_0\"; const y = \"AUTO_STRING_1\";");
        assert_eq!(tags.get("AUTO_STRING_0"), Some("'./x'"));
        assert_eq!(tags.get("AUTO_STRING_1"), Some("\"y\""));
    }
}
