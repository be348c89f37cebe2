//! Diagnostic reporting for the Rill compiler.
//!
//! The scanner (and, later, the parser) never aborts on bad input.
//! Instead it records diagnostics into a [`Reporter`] — an explicit,
//! per-run context object that owns the "had error" flag. Drivers check
//! [`Reporter::had_error`] after a pass and decide whether the output
//! of that pass can be trusted.
//!
//! Rendering is separate from collection: [`TerminalEmitter`] writes
//! collected diagnostics to any `io::Write` with optional ANSI color.

mod diagnostic;
mod emitter;
mod reporter;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, TerminalEmitter};
pub use reporter::Reporter;
