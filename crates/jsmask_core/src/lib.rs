//! jsmask_core: Core types shared by the jsmask crates.
//!
//! Provides text spans and line maps for locating lexemes in source text,
//! and the tag map that backs every tag/restore cycle.

pub mod tags;
pub mod text;

// Re-export commonly used types
pub use tags::{TagMap, TagStyle};
pub use text::{LineMap, TextSpan};
