//! Hand-written lexical scanner for the Rill language.
//!
//! Converts raw source text into an ordered [`Token`] stream using
//! maximal munch with bounded lookahead. The scanner never aborts on
//! bad input: unscannable characters and unterminated strings are
//! reported to a [`rill_diagnostic::Reporter`] and skipped, so one pass
//! surfaces every problem.
//!
//! # Pipeline position
//!
//! This crate is the first compiler phase. Its output feeds a future
//! parser; whether the stream is trustworthy is decided by the caller
//! via `Reporter::had_error()`.
//!
//! # Usage
//!
//! ```
//! use rill_diagnostic::Reporter;
//! use rill_lexer::{Scanner, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("var answer = 42;");
//! let mut reporter = Reporter::new();
//! let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
//!
//! assert!(!reporter.had_error());
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! ```

mod cursor;
mod keywords;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;
pub use token::{Literal, Token, TokenKind};
