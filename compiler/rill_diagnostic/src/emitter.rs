//! Terminal emitter.
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be
    /// used; it is ignored for `Always` and `Never`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as `[line N] severity: message`, one per line.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter with explicit color mode.
    ///
    /// `is_tty` is the caller's terminal detection (the emitter itself
    /// performs no I/O probing), consulted only for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create an emitter that never colors output.
    pub fn plain(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::Never, false)
    }

    /// Write a single diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let severity = diagnostic.severity;
        if self.colors {
            let color = match severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
            };
            writeln!(
                self.writer,
                "[line {}] {color}{severity}{}: {}",
                diagnostic.line,
                colors::RESET,
                diagnostic.message,
            )
        } else {
            writeln!(self.writer, "{diagnostic}")
        }
    }

    /// Write every diagnostic in order, then a summary line when any
    /// of them were errors.
    pub fn emit_all(&mut self, diagnostics: &[Diagnostic]) -> io::Result<()> {
        for diagnostic in diagnostics {
            self.emit(diagnostic)?;
        }
        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        if errors > 0 {
            self.summary(errors)?;
        }
        Ok(())
    }

    /// Write the closing `N lexical error(s)` summary.
    pub fn summary(&mut self, errors: usize) -> io::Result<()> {
        writeln!(self.writer, "{errors} lexical error{}", plural_s(errors))
    }

    /// Consume the emitter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(diagnostics: &[Diagnostic], mode: ColorMode, is_tty: bool) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, is_tty);
        emitter.emit_all(diagnostics).unwrap();
        String::from_utf8(emitter.into_writer()).unwrap()
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let out = render(
            &[Diagnostic::error(1, "unterminated string")],
            ColorMode::Never,
            true,
        );
        assert_eq!(out, "[line 1] error: unterminated string\n1 lexical error\n");
    }

    #[test]
    fn colored_output_wraps_severity() {
        let out = render(
            &[Diagnostic::error(1, "unterminated string")],
            ColorMode::Always,
            false,
        );
        assert!(out.contains("\x1b[1;31merror\x1b[0m"));
    }

    #[test]
    fn auto_mode_follows_tty_detection() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }

    #[test]
    fn summary_pluralizes() {
        let out = render(
            &[
                Diagnostic::error(1, "unexpected character `@`"),
                Diagnostic::error(2, "unexpected character `#`"),
            ],
            ColorMode::Never,
            false,
        );
        assert!(out.ends_with("2 lexical errors\n"));
    }

    #[test]
    fn warnings_emit_without_summary() {
        let out = render(
            &[Diagnostic::warning(3, "odd but legal")],
            ColorMode::Never,
            false,
        );
        assert_eq!(out, "[line 3] warning: odd but legal\n");
    }
}
