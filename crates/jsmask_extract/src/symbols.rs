//! Documentation comments and the declarations they document.

use crate::normalize_kind;
use jsmask_mask::replace_ranges;
use jsmask_scanner::{LexemeKind, Scanner};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

lazy_static! {
    /// The declaration that may follow a `/** */` comment.
    static ref ATTACHED_DECLARATION: Regex = Regex::new(concat!(
        r"^\s+(?:(?P<export>export)\s+(?:(?P<default>default)\s+)?)?(?:declare\s+)?(?:abstract\s+)?",
        r"(?P<kind>type|enum|interface|const|var|let|(?:async\s+)?function\*?|class)\s+(?P<name>[\w$]+)",
    ))
    .unwrap();
}

/// A documentation comment and, if one follows it, the declaration it
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsdocSymbol {
    /// The comment plus the attached declaration head.
    pub full: String,
    /// The `/** ... */` comment.
    pub jsdoc: String,
    /// Declared name, empty when nothing is attached.
    pub name: String,
    /// Declaration kind such as `class` or `async function*`, empty when
    /// nothing is attached.
    pub kind: String,
    pub is_exported: bool,
    pub is_default: bool,
}

/// Find every documentation comment with its byte range in `text`.
///
/// Only comments the scanner reports count, so `/**` inside a string
/// literal is never a documentation comment. The declaration must follow
/// the comment after nothing but whitespace; blank lines are allowed.
fn scan_jsdoc_symbols(text: &str) -> impl Iterator<Item = (Range<usize>, JsdocSymbol)> + '_ {
    Scanner::new(text)
        .filter(|lexeme| lexeme.kind == LexemeKind::BlockComment)
        .filter(move |lexeme| {
            let comment = lexeme.text(text);
            comment.starts_with("/**") && comment.len() > "/**/".len()
        })
        .map(move |lexeme| {
            let range = lexeme.span.to_range();
            let jsdoc = text[range.clone()].to_string();
            match ATTACHED_DECLARATION.captures(&text[range.end..]) {
                Some(caps) => {
                    let end = range.end + caps[0].len();
                    let symbol = JsdocSymbol {
                        full: text[range.start..end].to_string(),
                        jsdoc,
                        name: caps["name"].to_string(),
                        kind: normalize_kind(&caps["kind"]),
                        is_exported: caps.name("export").is_some(),
                        is_default: caps.name("default").is_some(),
                    };
                    (range.start..end, symbol)
                }
                None => {
                    let symbol = JsdocSymbol {
                        full: jsdoc.clone(),
                        jsdoc,
                        name: String::new(),
                        kind: String::new(),
                        is_exported: false,
                        is_default: false,
                    };
                    (range, symbol)
                }
            }
        })
}

/// Call `f` with each documentation comment in `text`, in source order.
pub fn for_each_jsdoc_symbol<F>(text: &str, mut f: F)
where
    F: FnMut(JsdocSymbol),
{
    for (_, symbol) in scan_jsdoc_symbols(text) {
        f(symbol);
    }
}

/// Collect every documentation comment in `text`.
pub fn jsdoc_symbols(text: &str) -> Vec<JsdocSymbol> {
    scan_jsdoc_symbols(text).map(|(_, symbol)| symbol).collect()
}

/// Replace each documentation comment, together with its attached
/// declaration head, with the output of `f`.
pub fn replace_jsdoc_symbols<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&JsdocSymbol) -> String,
{
    replace_ranges(text, scan_jsdoc_symbols(text).map(|(range, symbol)| (range, f(&symbol))))
}
