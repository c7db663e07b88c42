//! jsmask_extract: Structural extractors over masked JavaScript/TypeScript.
//!
//! Each extractor runs its patterns against text whose literals (and, for
//! exports and imports, comments) are hidden behind placeholders, so code-like
//! text inside a string or comment is never reported. Record fields carry
//! real source text.

mod exports;
mod imports;
mod symbols;

pub use exports::{export_symbols, for_each_export_symbol, replace_export_symbols, ExportSymbol};
pub use imports::{for_each_import_symbol, import_symbols, replace_import_symbols, ImportSymbol};
pub use symbols::{for_each_jsdoc_symbol, jsdoc_symbols, replace_jsdoc_symbols, JsdocSymbol};

/// Collapse every whitespace run in a declaration kind to a single space.
pub(crate) fn normalize_kind(kind: &str) -> String {
    kind.split_whitespace().collect::<Vec<_>>().join(" ")
}
