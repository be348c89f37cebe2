//! Per-run diagnostic collection.
//!
//! The scanner reports problems and keeps going; the [`Reporter`] is
//! where those reports land. One reporter corresponds to one pass over
//! one source buffer. Hosts that scan repeatedly (the interactive
//! prompt) either construct a fresh reporter per run or call
//! [`Reporter::reset`] between runs, so error state never outlives the
//! run it belongs to.

use crate::{Diagnostic, Severity};

/// Collects diagnostics for a single pass and owns the "had error" flag.
///
/// Diagnostics are kept in the order they were reported, which for the
/// scanner is source order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl Reporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Report an error on the given source line.
    pub fn error(&mut self, line: u32, message: impl Into<String>) {
        self.report(Diagnostic::error(line, message));
    }

    /// Report a pre-built diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any error has been reported since construction
    /// or the last [`reset`](Self::reset).
    ///
    /// Drivers must check this after a pass and must not feed the pass
    /// output to later phases when it is set.
    pub fn had_error(&self) -> bool {
        self.error_count > 0
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clear all diagnostics and the error flag.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_reporter_has_no_errors() {
        let reporter = Reporter::new();
        assert!(!reporter.had_error());
        assert_eq!(reporter.error_count(), 0);
        assert!(reporter.diagnostics().is_empty());
    }

    #[test]
    fn error_sets_flag() {
        let mut reporter = Reporter::new();
        reporter.error(1, "unexpected character `@`");
        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 1);
    }

    #[test]
    fn warnings_do_not_set_flag() {
        let mut reporter = Reporter::new();
        reporter.report(Diagnostic::warning(2, "something benign"));
        assert!(!reporter.had_error());
        assert_eq!(reporter.diagnostics().len(), 1);
    }

    #[test]
    fn diagnostics_preserve_report_order() {
        let mut reporter = Reporter::new();
        reporter.error(4, "first");
        reporter.error(2, "second");
        reporter.error(9, "third");
        let lines: Vec<u32> = reporter.diagnostics().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![4, 2, 9]);
    }

    #[test]
    fn reset_clears_flag_and_diagnostics() {
        let mut reporter = Reporter::new();
        reporter.error(1, "boom");
        reporter.reset();
        assert!(!reporter.had_error());
        assert!(reporter.diagnostics().is_empty());
        assert_eq!(reporter.error_count(), 0);
    }

    #[test]
    fn reset_reporter_is_reusable() {
        let mut reporter = Reporter::new();
        reporter.error(1, "first run");
        reporter.reset();
        reporter.error(5, "second run");
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.diagnostics()[0].line, 5);
    }
}
