//! The lexical span scanner.
//!
//! A small state machine over the source bytes. From the normal state it
//! enters exactly one of: line comment, block comment, quoted literal or
//! regex literal, consumes it whole, and reports it as a [`Lexeme`]. Text
//! between lexemes is never reported.

use crate::boundary::index_of_closing_quote;
use crate::char_codes::*;
use jsmask_core::text::TextSpan;
use jsmask_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use memchr::{memchr, memmem, memrchr};

/// The lexical category of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    /// A `'`, `"` or backtick literal. `quote` is the delimiter.
    String { quote: char },
    /// `//` to the end of the line (line break excluded).
    LineComment,
    /// `/*` to the nearest `*/`.
    BlockComment,
    /// A regex literal, recognized only after `=` or `(`.
    RegexLiteral,
}

impl LexemeKind {
    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, LexemeKind::String { .. })
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(self, LexemeKind::LineComment | LexemeKind::BlockComment)
    }
}

/// A scanned span of one lexical category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub span: TextSpan,
    /// False when the span was clamped to the end of the text.
    pub terminated: bool,
}

impl Lexeme {
    /// The source text of this lexeme, delimiters included.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

/// Scans source text into string, comment and regex lexemes.
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// The same text as bytes; every delimiter is ASCII.
    bytes: &'a [u8],
    /// Current position in the text.
    pos: usize,
    /// Accumulated diagnostics for clamped spans.
    diagnostics: DiagnosticCollection,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Scan the next lexeme, or `None` at the end of the text.
    pub fn scan_lexeme(&mut self) -> Option<Lexeme> {
        while !self.is_eof() {
            let start = self.pos;
            let lexeme = match self.bytes[start] {
                SLASH if self.char_at(start + 1) == Some(SLASH) => Some(self.scan_line_comment(start)),
                SLASH if self.char_at(start + 1) == Some(ASTERISK) => Some(self.scan_block_comment(start)),
                EQUALS | OPEN_PAREN => self.try_scan_regex_literal(start),
                ch if is_quote(ch) => Some(self.scan_string_literal(start)),
                _ => None,
            };
            match lexeme {
                Some(lexeme) => {
                    self.pos = lexeme.span.end() as usize;
                    return Some(lexeme);
                }
                None => self.pos += 1,
            }
        }
        None
    }

    fn scan_line_comment(&mut self, start: usize) -> Lexeme {
        let end = self.bytes[start + 2..]
            .iter()
            .position(|&ch| is_line_break(ch))
            .map_or(self.bytes.len(), |offset| start + 2 + offset);
        Lexeme {
            kind: LexemeKind::LineComment,
            span: TextSpan::from_range(start..end),
            terminated: true,
        }
    }

    fn scan_block_comment(&mut self, start: usize) -> Lexeme {
        let (end, terminated) = match memmem::find(&self.bytes[start + 2..], b"*/") {
            Some(offset) => (start + 2 + offset + 2, true),
            None => (self.bytes.len(), false),
        };
        let span = TextSpan::from_range(start..end);
        if !terminated {
            self.diagnostics
                .add(Diagnostic::at(span, &messages::ASTERISK_SLASH_EXPECTED));
        }
        Lexeme {
            kind: LexemeKind::BlockComment,
            span,
            terminated,
        }
    }

    fn scan_string_literal(&mut self, start: usize) -> Lexeme {
        let quote = self.bytes[start];
        let (end, terminated) = match index_of_closing_quote(self.text, start) {
            Some(close) => (close + 1, true),
            None => (self.bytes.len(), false),
        };
        let span = TextSpan::from_range(start..end);
        if !terminated {
            let message = if quote == BACKTICK {
                &messages::UNTERMINATED_TEMPLATE_LITERAL
            } else {
                &messages::UNTERMINATED_STRING_LITERAL
            };
            self.diagnostics.add(Diagnostic::at(span, message));
        }
        Lexeme {
            kind: LexemeKind::String { quote: quote as char },
            span,
            terminated,
        }
    }

    /// Try to scan a regex literal after the `=` or `(` at `trigger`.
    ///
    /// After optional whitespace (line breaks included) there must be a `/`
    /// that does not open a comment. The literal then runs to the last `/`
    /// on that line, with at least one character in between, followed by any
    /// `gimsuy` flags. This is a heuristic: it misses regex literals in other
    /// positions (after `return`, `,`, `&&`, ...) and can overshoot when a
    /// later `/` shares the line.
    fn try_scan_regex_literal(&self, trigger: usize) -> Option<Lexeme> {
        let mut slash = trigger + 1;
        while self.char_at(slash).map_or(false, is_white_space) {
            slash += 1;
        }
        if self.char_at(slash) != Some(SLASH) {
            return None;
        }
        if matches!(self.char_at(slash + 1), Some(SLASH) | Some(ASTERISK) | Some(LINE_FEED) | None) {
            return None;
        }
        let body = slash + 2;
        let line_end = memchr(LINE_FEED, self.bytes.get(body..)?).map_or(self.bytes.len(), |offset| body + offset);
        let close = body + memrchr(SLASH, &self.bytes[body..line_end])?;
        let mut end = close + 1;
        while self.char_at(end).map_or(false, is_regex_flag) {
            end += 1;
        }
        Some(Lexeme {
            kind: LexemeKind::RegexLiteral,
            span: TextSpan::from_range(slash..end),
            terminated: true,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.scan_lexeme()
    }
}

/// Scan `text` and collect every lexeme in source order.
pub fn scan_lexemes(text: &str) -> Vec<Lexeme> {
    Scanner::new(text).collect()
}

/// Scan `text` and return the diagnostics for clamped literals and comments.
pub fn lexical_diagnostics(text: &str) -> DiagnosticCollection {
    let mut scanner = Scanner::new(text);
    while scanner.scan_lexeme().is_some() {}
    scanner.take_diagnostics()
}
