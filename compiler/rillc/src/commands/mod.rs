//! Driver commands: script runner and interactive prompt.
//!
//! Parsing and evaluation are future phases; "running" a script today
//! means scanning it, dumping the token stream, and reflecting lexical
//! success in the exit code. The scanner appends into a
//! [`Reporter`]; these commands check `had_error()` after each pass
//! and never hand a flagged stream to anything downstream.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};

use rill_diagnostic::{ColorMode, Reporter, TerminalEmitter};
use rill_lexer::{Scanner, SourceBuffer};
use thiserror::Error;

/// Exit code for a pass that reported lexical errors (sysexits `EX_DATAERR`).
pub const EXIT_DATA_ERR: i32 = 65;

/// Exit code for bad command-line usage (sysexits `EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;

/// Failure to materialize a source file in memory.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("`{path}` exceeds the 4 GiB source limit")]
    TooLarge { path: String },
}

/// Read a source file fully into memory.
///
/// The scanner tracks positions as `u32`, so sources past 4 GiB are
/// rejected here rather than silently truncated downstream.
pub fn read_file(path: &str) -> Result<String, InputError> {
    let source = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_string(),
        source,
    })?;
    if u32::try_from(source.len()).is_err() {
        return Err(InputError::TooLarge {
            path: path.to_string(),
        });
    }
    Ok(source)
}

/// Scan `source`, writing the token stream to `out` and diagnostics to
/// `diag`.
///
/// The caller owns the [`Reporter`] and checks `had_error()` afterwards;
/// the prompt reuses one reporter across lines with `reset()` in
/// between, while the file runner scopes one per pass.
pub fn scan_and_print(
    source: &str,
    reporter: &mut Reporter,
    out: &mut impl Write,
    diag: &mut TerminalEmitter<impl Write>,
) -> io::Result<()> {
    let buffer = SourceBuffer::new(source);
    let tokens = Scanner::new(&buffer, reporter).scan_tokens();
    tracing::debug!(
        bytes = buffer.len(),
        tokens = tokens.len(),
        errors = reporter.error_count(),
        "scan complete"
    );
    for token in &tokens {
        writeln!(out, "[line {}] {token}", token.line)?;
    }
    diag.emit_all(reporter.diagnostics())?;
    Ok(())
}

/// Scan a script file and dump its token stream.
///
/// Returns the process exit code: 0 on a clean pass, 65 when the
/// reporter flagged lexical errors, 1 when the file cannot be read.
pub fn run_file(path: &str) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let is_tty = io::stderr().is_terminal();
    let mut diag = TerminalEmitter::with_color_mode(io::stderr(), ColorMode::Auto, is_tty);
    let mut reporter = Reporter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match scan_and_print(&source, &mut reporter, &mut out, &mut diag) {
        Ok(()) if reporter.had_error() => EXIT_DATA_ERR,
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// Interactive prompt over stdin/stdout.
pub fn run_prompt() -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match prompt_loop(&mut stdin.lock(), &mut stdout.lock(), &mut io::stderr()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// The prompt loop, testable against in-memory readers and writers.
///
/// Reads a line, scans it, prints its tokens, and resets the reporter
/// so an erroring line never poisons the next one. Ends at EOF.
pub fn prompt_loop(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let mut reporter = Reporter::new();
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let mut diag = TerminalEmitter::plain(&mut *err);
        scan_and_print(&line, &mut reporter, out, &mut diag)?;
        reporter.reset();
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

    fn scan_to_strings(source: &str) -> (String, String, bool) {
        let mut reporter = Reporter::new();
        let mut out = Vec::new();
        let mut diag = TerminalEmitter::plain(Vec::new());
        scan_and_print(source, &mut reporter, &mut out, &mut diag).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag.into_writer()).unwrap(),
            reporter.had_error(),
        )
    }

    #[test]
    fn token_dump_format() {
        let (out, diag, had_error) = scan_to_strings("print 1;");
        assert_eq!(
            out,
            "[line 1] Print \"print\"\n\
             [line 1] Number \"1\" (1)\n\
             [line 1] Semicolon \";\"\n"
        );
        assert_eq!(diag, "");
        assert!(!had_error);
    }

    #[test]
    fn diagnostics_go_to_the_diag_writer() {
        let (out, diag, had_error) = scan_to_strings("@");
        assert_eq!(out, "");
        assert_eq!(
            diag,
            "[line 1] error: unexpected character `@`\n1 lexical error\n"
        );
        assert!(had_error);
    }

    #[test]
    fn erroring_pass_still_dumps_surrounding_tokens() {
        let (out, diag, had_error) = scan_to_strings("1 @ 2");
        assert!(out.contains("Number \"1\""));
        assert!(out.contains("Number \"2\""));
        assert!(diag.contains("unexpected character"));
        assert!(had_error);
    }

    #[test]
    fn read_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"var x = 1;\n").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(read_file(&path).unwrap(), "var x = 1;\n");
    }

    #[test]
    fn read_file_missing_names_the_path() {
        let err = read_file("no/such/file.rill").unwrap_err();
        assert!(err.to_string().contains("no/such/file.rill"));
    }

    #[test]
    fn prompt_scans_each_line() {
        let mut input = io::Cursor::new(b"1 + 2\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        prompt_loop(&mut input, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "> [line 1] Number \"1\" (1)\n\
             [line 1] Plus \"+\"\n\
             [line 1] Number \"2\" (2)\n\
             > \n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn prompt_recovers_after_bad_line() {
        let mut input = io::Cursor::new(b"@\n3\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        prompt_loop(&mut input, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        // The bad line was reported once ...
        assert_eq!(
            err,
            "[line 1] error: unexpected character `@`\n1 lexical error\n"
        );
        // ... and the next line still scanned cleanly.
        assert!(out.contains("Number \"3\" (3)"));
    }
}
