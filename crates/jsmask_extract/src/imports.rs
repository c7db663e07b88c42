//! Module references: `import`, `export ... from` and `require`.

use jsmask_mask::{replace_ranges, MaskedSource};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use tracing::trace;

/// Whitespace or a tagged comment between two clause tokens.
const GAP: &str = r"(?:\s|/\* AUTO_COMMENT_\d+ \*/)";

lazy_static! {
    static ref IMPORT_SYMBOL: Regex = {
        // `{ a, b as c }` or `* as ns`
        let named = format!(r"(?:\{{[^{{}}]*\}}|\*{GAP}*as{GAP}+[\w$]+)");
        // `named`, `default` or `default, named`
        let clause = format!(r"(?:{GAP}*{named}|{GAP}+[\w$]+(?:{GAP}*,{GAP}*{named})?)");
        // `*`, `* as ns` or `{ a, b }`
        let reexport = format!(r"(?:\*(?:{GAP}*as{GAP}+[\w$]+)?|\{{[^{{}}]*\}})");
        let path = r#"(?P<from>"AUTO_STRING_\d+")"#;
        let pattern = [
            r#"\bimport\s*\(\s*(?P<dynamic>"AUTO_STRING_\d+")\s*\)"#.to_string(),
            r#"\bimport\s*(?P<bare>"AUTO_STRING_\d+")"#.to_string(),
            format!(r"\b(?:import(?:{GAP}+type)?{clause}|export(?:{GAP}+type)?{GAP}*{reexport}){GAP}*from{GAP}*{path}"),
            r#"\brequire\s*\(\s*(?P<require>"AUTO_STRING_\d+")\s*\)"#.to_string(),
        ]
        .join("|");
        Regex::new(&pattern).unwrap()
    };
}

/// A reference to another module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSymbol {
    /// The matched statement or call text.
    pub full: String,
    /// The module path, without quotes.
    pub file: String,
}

fn scan_import_symbols(masked: &MaskedSource) -> Vec<(Range<usize>, ImportSymbol)> {
    let symbols: Vec<_> = IMPORT_SYMBOL
        .captures_iter(masked.text())
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let path = ["dynamic", "bare", "from", "require"]
                .iter()
                .find_map(|group| caps.name(group))?;
            let symbol = ImportSymbol {
                full: masked.restore(whole.as_str()),
                file: masked.string_value(path.as_str()),
            };
            Some((whole.range(), symbol))
        })
        .collect();
    trace!(count = symbols.len(), "matched import symbols");
    symbols
}

/// Call `f` with each module reference in `text`, in source order.
pub fn for_each_import_symbol<F>(text: &str, mut f: F)
where
    F: FnMut(ImportSymbol),
{
    let masked = MaskedSource::strings_and_comments(text);
    for (_, symbol) in scan_import_symbols(&masked) {
        f(symbol);
    }
}

/// Collect every module reference in `text`.
pub fn import_symbols(text: &str) -> Vec<ImportSymbol> {
    let masked = MaskedSource::strings_and_comments(text);
    scan_import_symbols(&masked).into_iter().map(|(_, symbol)| symbol).collect()
}

/// Replace each module reference with the output of `f`.
pub fn replace_import_symbols<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&ImportSymbol) -> String,
{
    let masked = MaskedSource::strings_and_comments(text);
    let replacements = scan_import_symbols(&masked)
        .into_iter()
        .map(|(range, symbol)| (range, f(&symbol)));
    let replaced = replace_ranges(masked.text(), replacements);
    masked.restore(&replaced)
}
