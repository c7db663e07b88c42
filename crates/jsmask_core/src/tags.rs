//! Tag maps: reversible placeholder substitution.
//!
//! A tagging pass replaces each masked span with a unique placeholder and
//! records the original text. Restoring puts each original back in place of
//! the first occurrence of its placeholder, in one left-to-right pass.
//! Later duplicates and unknown keys are left as they are; placeholders that
//! no longer occur are skipped.
//!
//! Source text that already contains a placeholder-shaped substring (for
//! example the literal `"AUTO_STRING_0"`) can be restored into the wrong
//! place. This collision is not detected.

use indexmap::IndexMap;

/// The placeholder shape used by a tag map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `"AUTO_STRING_<n>"`, a plain double-quoted string literal.
    String,
    /// `/* AUTO_COMMENT_<n> */`, a block comment.
    Comment,
}

impl TagStyle {
    /// The key prefix, without the counter.
    pub fn prefix(self) -> &'static str {
        match self {
            TagStyle::String => "AUTO_STRING_",
            TagStyle::Comment => "AUTO_COMMENT_",
        }
    }

    /// The text placed before and after the key.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            TagStyle::String => ("\"", "\""),
            TagStyle::Comment => ("/* ", " */"),
        }
    }

    /// Wrap a key into the placeholder text that is inserted into the source.
    pub fn wrap(self, key: &str) -> String {
        let (open, close) = self.delimiters();
        format!("{open}{key}{close}")
    }
}

/// An ordered mapping from placeholder keys to the original span text.
#[derive(Debug, Clone)]
pub struct TagMap {
    style: TagStyle,
    tags: IndexMap<String, String>,
}

impl TagMap {
    /// Create an empty tag map. The counter starts at 0.
    pub fn new(style: TagStyle) -> Self {
        Self {
            style,
            tags: IndexMap::new(),
        }
    }

    /// The placeholder shape of this map.
    pub fn style(&self) -> TagStyle {
        self.style
    }

    /// Record `original` and return the placeholder that should replace it.
    pub fn tag(&mut self, original: &str) -> String {
        let key = format!("{}{}", self.style.prefix(), self.tags.len());
        let placeholder = self.style.wrap(&key);
        self.tags.insert(key, original.to_string());
        placeholder
    }

    /// Look up the original text for a key such as `AUTO_STRING_3`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Put every tagged original back into `text`.
    pub fn restore(&self, text: &str) -> String {
        let prefix = self.style.prefix();
        if self.tags.is_empty() || !text.contains(prefix) {
            return text.to_string();
        }
        let (open, close) = self.style.delimiters();
        let bytes = text.as_bytes();
        let mut restored = vec![false; self.tags.len()];
        let mut result = String::with_capacity(text.len());
        let mut cursor = 0;
        for (at, _) in text.match_indices(prefix) {
            let Some(start) = at.checked_sub(open.len()) else { continue };
            if start < cursor || &bytes[start..at] != open.as_bytes() {
                continue;
            }
            let digits_end = at
                + prefix.len()
                + bytes[at + prefix.len()..]
                    .iter()
                    .take_while(|ch| ch.is_ascii_digit())
                    .count();
            let end = digits_end + close.len();
            if bytes.get(digits_end..end) != Some(close.as_bytes()) {
                continue;
            }
            let Some((index, _, original)) = self.tags.get_full(&text[at..digits_end]) else { continue };
            if restored[index] {
                continue;
            }
            restored[index] = true;
            result.push_str(&text[cursor..start]);
            result.push_str(original);
            cursor = end;
        }
        result.push_str(&text[cursor..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_counts_from_zero() {
        let mut tags = TagMap::new(TagStyle::String);
        assert_eq!(tags.tag("'a'"), "\"AUTO_STRING_0\"");
        assert_eq!(tags.tag("`b`"), "\"AUTO_STRING_1\"");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("AUTO_STRING_1"), Some("`b`"));
    }

    #[test]
    fn test_comment_placeholder_shape() {
        let mut tags = TagMap::new(TagStyle::Comment);
        assert_eq!(tags.tag("// x"), "/* AUTO_COMMENT_0 */");
    }

    #[test]
    fn test_restore_first_occurrence_only() {
        let mut tags = TagMap::new(TagStyle::String);
        let p = tags.tag("'x'");
        let text = format!("{p} + {p}");
        assert_eq!(tags.restore(&text), "'x' + \"AUTO_STRING_0\"");
    }

    #[test]
    fn test_restore_does_not_confuse_longer_keys() {
        let mut tags = TagMap::new(TagStyle::String);
        let mut placeholders = Vec::new();
        for i in 0..11 {
            placeholders.push(tags.tag(&format!("'s{i}'")));
        }
        // "AUTO_STRING_1" must not match inside "AUTO_STRING_10"
        let text = format!("{} {}", placeholders[10], placeholders[1]);
        assert_eq!(tags.restore(&text), "'s10' 's1'");
    }

    #[test]
    fn test_restore_out_of_order_placeholders() {
        let mut tags = TagMap::new(TagStyle::String);
        let a = tags.tag("'a'");
        let b = tags.tag("`b`");
        let c = tags.tag("\"c\"");
        let text = format!("{c}; {a}({b}, {a})");
        assert_eq!(tags.restore(&text), "\"c\"; 'a'(`b`, \"AUTO_STRING_0\")");
    }

    #[test]
    fn test_restore_requires_delimiters_and_known_keys() {
        let mut tags = TagMap::new(TagStyle::Comment);
        tags.tag("// x");
        assert_eq!(tags.restore("AUTO_COMMENT_0"), "AUTO_COMMENT_0");
        assert_eq!(tags.restore("/* AUTO_COMMENT_7 */"), "/* AUTO_COMMENT_7 */");
        assert_eq!(tags.restore("/* AUTO_COMMENT_0 *//* AUTO_COMMENT_0 */"), "// x/* AUTO_COMMENT_0 */");
    }

    #[test]
    fn test_restore_many_placeholders() {
        let mut tags = TagMap::new(TagStyle::String);
        let text: Vec<String> = (0..2000).map(|i| tags.tag(&format!("'{i}'"))).collect();
        let expected: Vec<String> = (0..2000).map(|i| format!("'{i}'")).collect();
        assert_eq!(tags.restore(&text.join(",")), expected.join(","));
    }

    #[test]
    fn test_restore_missing_placeholder_is_noop() {
        let mut tags = TagMap::new(TagStyle::Comment);
        tags.tag("/* gone */");
        assert_eq!(tags.restore("let x = 1;"), "let x = 1;");
    }
}
