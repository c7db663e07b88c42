//! jsmask_diagnostics: Advisory diagnostics for lexical masking.
//!
//! Masking itself never fails. When the scanner has to clamp a literal or a
//! comment to the end of the text it records a warning here so callers can
//! tell the source was probably malformed.

use jsmask_core::text::TextSpan;
use std::fmt;

/// A warning message with its code.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1002).
    pub code: u32,
    pub message: &'static str,
}

/// A warning attached to the span of the scanned text it concerns.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file the scanned text came from, once known.
    pub file: Option<String>,
    /// The clamped span.
    pub span: TextSpan,
    pub message_text: &'static str,
    pub code: u32,
}

impl Diagnostic {
    pub fn at(span: TextSpan, message: &DiagnosticMessage) -> Self {
        Self {
            file: None,
            span,
            message_text: message.message,
            code: message.code,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}({}): ", file, self.span.start)?;
        }
        write!(f, "warning JM{}: {}", self.code, self.message_text)
    }
}

/// The diagnostics of one scan, in source order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Attach a file name to every diagnostic that has none yet.
    pub fn set_file(&mut self, file: &str) {
        for diagnostic in &mut self.diagnostics {
            if diagnostic.file.is_none() {
                diagnostic.file = Some(file.to_string());
            }
        }
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner warnings (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, "Unterminated string literal.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, "'*/' expected.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1060, "Unterminated template literal.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let mut collection = DiagnosticCollection::new();
        collection.add(Diagnostic::at(TextSpan::from_bounds(10, 15), &messages::UNTERMINATED_STRING_LITERAL));
        assert_eq!(
            collection.diagnostics()[0].to_string(),
            "warning JM1002: Unterminated string literal."
        );
        collection.set_file("test.ts");
        assert_eq!(
            collection.diagnostics()[0].to_string(),
            "test.ts(10): warning JM1002: Unterminated string literal."
        );
    }

    #[test]
    fn test_set_file_keeps_existing_file() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());
        collection.add(Diagnostic::at(TextSpan::from_bounds(5, 6), &messages::ASTERISK_SLASH_EXPECTED));
        collection.set_file("a.ts");
        collection.set_file("b.ts");
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.diagnostics()[0].file.as_deref(), Some("a.ts"));
        assert_eq!(collection.diagnostics()[0].code, 1010);
    }
}
