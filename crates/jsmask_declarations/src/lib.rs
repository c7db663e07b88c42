//! jsmask_declarations: Fix-ups for generated `.d.ts` text.
//!
//! Declaration emitters produce `export declare ...` and `export default ...`
//! forms that some consumers cannot read. The rewrites here run on masked
//! text, so keywords inside strings and comments are left alone.

use jsmask_mask::MaskedSource;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

lazy_static! {
    static ref EXPORT_DECLARE: Regex = Regex::new(r"\bexport\s+declare\b").unwrap();
    static ref EXPORT_DEFAULT: Regex = Regex::new(r"\bexport\s+default\s+").unwrap();
    static ref DECLARE_MODULE: Regex = Regex::new(r#"\bdeclare\s+module\s+"AUTO_STRING_\d+""#).unwrap();
}

/// Normalize generated declaration text.
///
/// - every `export declare` becomes `export`
/// - the first `export default ` becomes `export = `
/// - with `module_name`, every `declare module "<name>"` is renamed to
///   `declare module "<module_name>"`
pub fn correct_declarations(text: &str, module_name: Option<&str>) -> String {
    let masked = MaskedSource::strings_and_comments(text);
    let corrected = EXPORT_DECLARE.replace_all(masked.text(), "export");
    let corrected = EXPORT_DEFAULT.replacen(&corrected, 1, "export = ");
    let corrected = match module_name {
        Some(name) => {
            debug!(module = name, "renaming ambient modules");
            DECLARE_MODULE
                .replace_all(&corrected, |_: &Captures<'_>| format!("declare module \"{}\"", name))
                .into_owned()
        }
        None => corrected.into_owned(),
    };
    masked.restore(&corrected)
}
