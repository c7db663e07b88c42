//! jsmask_scanner: Lexical span scanner for JavaScript/TypeScript source.
//!
//! Finds the boundaries of string/template literals, comments and regex
//! literals in one linear pass, without tokenizing anything else:
//! - Quoted literals end at the next unescaped quote of the same kind
//! - Line comments run to the end of the line
//! - Block comments run to the nearest `*/`
//! - Regex literals are only recognized after `=` or `(`

mod boundary;
mod char_codes;
mod scanner;

pub use boundary::index_of_closing_quote;
pub use scanner::{lexical_diagnostics, scan_lexemes, Lexeme, LexemeKind, Scanner};
