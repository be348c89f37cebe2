use std::fmt;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic: what went wrong and on which source line.
///
/// Lexical analysis is line-granular (tokens carry a line, not a byte
/// span), so diagnostics are too.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub severity: Severity,
    /// Source line the diagnostic points at (1-based).
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            line,
            message: message.into(),
        }
    }

    /// Returns `true` if this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_constructor_sets_severity() {
        let diag = Diagnostic::error(3, "unterminated string");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.line, 3);
        assert!(diag.is_error());
    }

    #[test]
    fn warning_is_not_error() {
        let diag = Diagnostic::warning(1, "shadowed binding");
        assert!(!diag.is_error());
    }

    #[test]
    fn display_matches_driver_format() {
        let diag = Diagnostic::error(7, "unexpected character `@`");
        assert_eq!(diag.to_string(), "[line 7] error: unexpected character `@`");
    }

    #[test]
    fn severity_displays_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
