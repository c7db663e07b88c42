//! Export statements, ES module and CommonJS.

use crate::normalize_kind;
use jsmask_mask::{replace_ranges, MaskedSource};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;
use std::ops::Range;
use tracing::trace;

lazy_static! {
    static ref EXPORT_SYMBOL: Regex = Regex::new(concat!(
        r"\bexport(?:\s+type)?\s*\{(?P<list>[^}]*)\}",
        r"|\bexport\s+(?:(?P<default>default)\s+)?(?:declare\s+)?(?:abstract\s+)?",
        r"(?P<kind>type|enum|interface|const|var|let|(?:async\s+)?function\*?|class)\s+(?P<name>[\w$]+)",
        r"|\bexport\s+default\s+(?P<anonymous>(?:async\s+)?function\b(?:\s*\*)?|class\b)",
        r"|\bexport\s+default\s+(?P<default_name>[\w$]+)",
        r"|\bexport\s*\*\s*as\s+(?P<namespace>[\w$]+)",
        r"|\bmodule\s*\.\s*exports\s*\.\s*(?P<exports_member>[\w$]+)\s*=",
        r"|\bmodule\s*\.\s*exports\s*(?P<assign>=)(?:\s*\{[^}]*\})?",
        r"|\bmodule\s*\.\s*(?P<member>[\w$]+)",
        r#"|\bmodule\s*\[\s*(?P<key>"AUTO_STRING_\d+")\s*\]"#,
    ))
    .unwrap();
    static ref COMMENT_PLACEHOLDER: Regex = Regex::new(r"/\* AUTO_COMMENT_\d+ \*/").unwrap();
}

/// An exported name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSymbol {
    /// The matched statement text, or the single specifier for list exports.
    pub full: String,
    /// Exported name. Empty for anonymous defaults and `module.exports = ...`.
    pub name: String,
    /// Declaration kind. Empty for list, namespace, default-expression and
    /// CommonJS exports.
    pub kind: String,
    /// True for `export default` and for whole-object `module.exports`
    /// assignment.
    pub is_default: bool,
}

impl ExportSymbol {
    fn named(full: String, name: impl Into<String>) -> Self {
        Self {
            full,
            name: name.into(),
            kind: String::new(),
            is_default: false,
        }
    }
}

/// Find every export with its byte range in the masked text.
fn scan_export_symbols(masked: &MaskedSource) -> Vec<(Range<usize>, ExportSymbol)> {
    let text = masked.text();
    let mut symbols = Vec::new();
    for caps in EXPORT_SYMBOL.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if let Some(list) = caps.name("list") {
            symbols.extend(list_specifiers(masked, list.start(), list.as_str()));
            continue;
        }
        let full = masked.restore(whole.as_str());
        let symbol = if let Some(kind) = caps.name("kind") {
            ExportSymbol {
                full,
                name: caps["name"].to_string(),
                kind: normalize_kind(kind.as_str()),
                is_default: caps.name("default").is_some(),
            }
        } else if let Some(kind) = caps.name("anonymous") {
            let mut kind_text = normalize_kind(&kind.as_str().replace('*', ""));
            if kind.as_str().ends_with('*') {
                kind_text.push('*');
            }
            ExportSymbol {
                full,
                name: String::new(),
                kind: kind_text,
                is_default: true,
            }
        } else if let Some(name) = caps.name("default_name") {
            default_export(full, name.as_str())
        } else if let Some(symbol) = commonjs_export(masked, &caps, full) {
            symbol
        } else {
            continue;
        };
        symbols.push((whole.range(), symbol));
    }
    trace!(count = symbols.len(), "matched export symbols");
    symbols
}

/// `export default <expression>`. An identifier is reported by name; an
/// `async` arrow function is anonymous.
fn default_export(full: String, name: &str) -> ExportSymbol {
    let name = if name == "async" { "" } else { name };
    ExportSymbol {
        full,
        name: name.to_string(),
        kind: String::new(),
        is_default: true,
    }
}

fn commonjs_export(masked: &MaskedSource, caps: &Captures<'_>, full: String) -> Option<ExportSymbol> {
    if let Some(name) = caps.name("namespace").or_else(|| caps.name("exports_member")) {
        return Some(ExportSymbol::named(full, name.as_str()));
    }
    if caps.name("assign").is_some() {
        return Some(ExportSymbol {
            full,
            name: String::new(),
            kind: String::new(),
            is_default: true,
        });
    }
    if let Some(member) = caps.name("member") {
        // `module.exports` read without assignment
        if member.as_str() == "exports" {
            return None;
        }
        return Some(ExportSymbol::named(full, member.as_str()));
    }
    let key = caps.name("key")?;
    Some(ExportSymbol::named(full, masked.string_value(key.as_str())))
}

/// Split the body of `export { ... }` into one symbol per specifier.
///
/// `offset` is the position of `list` in the masked text. Comments inside
/// the braces are blanked before splitting so they never end up in a name.
fn list_specifiers(masked: &MaskedSource, offset: usize, list: &str) -> Vec<(Range<usize>, ExportSymbol)> {
    let cleaned = COMMENT_PLACEHOLDER.replace_all(list, |caps: &Captures<'_>| " ".repeat(caps[0].len()));
    let mut symbols = Vec::new();
    let mut start = 0;
    for piece in cleaned.split(',') {
        let lead = piece.len() - piece.trim_start().len();
        let specifier = piece.trim();
        let range = offset + start + lead..offset + start + lead + specifier.len();
        start += piece.len() + 1;

        let mut words: Vec<&str> = specifier.split_whitespace().collect();
        if words.len() > 1 && words[0] == "type" {
            words.remove(0);
        }
        let exported = match words.as_slice() {
            [.., "as", alias] => *alias,
            [name, ..] => *name,
            [] => continue,
        };
        let name = if exported.starts_with('"') {
            masked.string_value(exported)
        } else {
            exported.to_string()
        };
        let full = masked.restore(&masked.text()[range.clone()]);
        let symbol = ExportSymbol {
            full,
            is_default: name == "default",
            name,
            kind: String::new(),
        };
        symbols.push((range, symbol));
    }
    symbols
}

/// Call `f` with each export in `text`, in source order.
pub fn for_each_export_symbol<F>(text: &str, mut f: F)
where
    F: FnMut(ExportSymbol),
{
    let masked = MaskedSource::strings_and_comments(text);
    for (_, symbol) in scan_export_symbols(&masked) {
        f(symbol);
    }
}

/// Collect every export in `text`.
pub fn export_symbols(text: &str) -> Vec<ExportSymbol> {
    let masked = MaskedSource::strings_and_comments(text);
    scan_export_symbols(&masked).into_iter().map(|(_, symbol)| symbol).collect()
}

/// Replace each export with the output of `f`.
///
/// For list exports each specifier is replaced on its own; otherwise the
/// whole matched text is.
pub fn replace_export_symbols<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&ExportSymbol) -> String,
{
    let masked = MaskedSource::strings_and_comments(text);
    let replacements = scan_export_symbols(&masked)
        .into_iter()
        .map(|(range, symbol)| (range, f(&symbol)));
    let replaced = replace_ranges(masked.text(), replacements);
    masked.restore(&replaced)
}
