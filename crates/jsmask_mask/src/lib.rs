//! jsmask_mask: String and comment masking for JavaScript/TypeScript text.
//!
//! Every operation is built on the lexical scanner:
//! - Strings: iterate, collect, replace, tag and untag string literals
//! - Comments: the same five operations for line and block comments
//! - `uncomment`: strip comments and tidy the remaining whitespace
//! - `MaskedSource`: the tag -> transform -> restore bracket used by the
//!   structural extractors

mod comments;
mod masked;
mod spans;
mod strings;

pub use comments::{
    comment_spans, comments, for_each_comment, replace_comments, tag_comments, uncomment, untag_comments,
};
pub use masked::{unquote, MaskedSource};
pub use spans::replace_ranges;
pub use strings::{
    for_each_string, mask_strings, replace_strings, string_spans, strings, tag_strings, untag_strings, MASKED_STRING,
};
