//! Masking integration tests.
//!
//! Exercises the string and comment masks together on realistic
//! JavaScript/TypeScript snippets.

use jsmask_mask::{
    comments, replace_comments, replace_strings, strings, tag_comments, tag_strings, uncomment, untag_comments,
    untag_strings, MaskedSource,
};

const MODULE_SOURCE: &str = r#"// Module header
import { join } from 'path';
const base = "http://example.com/*";
/**
 * Build a url.
 */
export function url(path) {
  // collapse slashes
  const pattern = /\/\//g;
  return `${base}/${path}`.replace(pattern, '/');
}
"#;

#[test]
fn test_string_round_trip() {
    let (tagged, tags) = tag_strings(MODULE_SOURCE);
    assert_eq!(tags.len(), 4);
    assert!(!tagged.contains("example.com"));
    assert_eq!(untag_strings(&tagged, &tags), MODULE_SOURCE);
}

#[test]
fn test_comment_round_trip() {
    let (tagged, tags) = tag_comments(MODULE_SOURCE);
    assert_eq!(tags.len(), 3);
    assert!(tagged.starts_with("/* AUTO_COMMENT_0 */\n"));
    assert_eq!(untag_comments(&tagged, &tags), MODULE_SOURCE);
}

#[test]
fn test_strings_skip_comments_and_regex() {
    assert_eq!(
        strings(MODULE_SOURCE),
        vec!["'path'", "\"http://example.com/*\"", "`${base}/${path}`", "'/'"]
    );
}

#[test]
fn test_comment_markers_inside_strings_are_ignored() {
    let found = comments(MODULE_SOURCE);
    assert_eq!(found.len(), 3);
    assert_eq!(found[0], "// Module header");
    assert!(found[1].starts_with("/**"));
    assert_eq!(found[2], "// collapse slashes");

    let masked = MaskedSource::strings_only(MODULE_SOURCE);
    assert_eq!(comments(masked.text()), found);
}

#[test]
fn test_regex_literal_does_not_start_comment() {
    let source = "x = /http:\\/\\//gi;";
    assert!(comments(source).is_empty());
    assert!(strings(source).is_empty());
}

#[test]
fn test_replace_comments_preserves_strings() {
    let source = "const a = '// keep'; // drop\nconst b = \"/* keep */\"; /* drop */";
    let result = replace_comments(source, |_| String::new());
    assert_eq!(result, "const a = '// keep'; \nconst b = \"/* keep */\"; ");
}

#[test]
fn test_replace_strings_passes_comments_through() {
    let source = "say('hi') /* 'quoted' */";
    let result = replace_strings(source, |full| full.to_uppercase());
    assert_eq!(result, "say('HI') /* 'quoted' */");
}

#[test]
fn test_restore_missing_placeholder_is_noop() {
    let (tagged, tags) = tag_strings("a('x'); b('y');");
    let edited = tagged.replace("\"AUTO_STRING_0\"", "z");
    assert_eq!(untag_strings(&edited, &tags), "a(z); b('y');");
}

#[test]
fn test_tag_indices_beyond_nine() {
    let source = (0..12).map(|i| format!("f('{i}');")).collect::<Vec<_>>().join("\n");
    let (tagged, tags) = tag_strings(&source);
    assert!(tagged.contains("\"AUTO_STRING_11\""));
    assert_eq!(untag_strings(&tagged, &tags), source);
}

#[test]
fn test_unterminated_comment_is_clamped() {
    let source = "let a = 1; /* open";
    assert_eq!(comments(source), vec!["/* open"]);
    let (tagged, tags) = tag_comments(source);
    assert_eq!(tagged, "let a = 1; /* AUTO_COMMENT_0 */");
    assert_eq!(untag_comments(&tagged, &tags), source);
}

#[test]
fn test_uncomment_module() {
    let expected = "import { join } from 'path';\nconst base = \"http://example.com/*\";\n\nexport function url(path) {\n\n  const pattern = /\\/\\//g;\n  return `${base}/${path}`.replace(pattern, '/');\n}\n";
    assert_eq!(uncomment(MODULE_SOURCE, false), expected);
}

#[test]
fn test_uncomment_is_idempotent() {
    let samples = [
        MODULE_SOURCE,
        "a // x\n\n\n\n/* y */ b   \n",
        "\n\n  /** doc */\nconst s = 'a // b';\t\n",
        "x = 1;\r\n// gone\r\n\r\n\r\ny = 2;\r\n",
    ];
    for sample in samples {
        for collapse in [false, true] {
            let once = uncomment(sample, collapse);
            assert_eq!(uncomment(&once, collapse), once, "sample: {sample:?}");
        }
    }
}

#[test]
fn test_uncomment_always_ends_with_single_newline() {
    assert_eq!(uncomment("", false), "\n");
    assert_eq!(uncomment("// only a comment", true), "\n");
    assert_eq!(uncomment("a\n\n\n", false), "a\n");
}
