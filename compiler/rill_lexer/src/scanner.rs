//! Hand-written scanner producing the Rill token stream.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and emits
//! [`Token`] values in source order. One scanner runs exactly one pass
//! over one buffer: construct, call [`Scanner::scan_tokens`], discard.
//!
//! # Design
//!
//! The main loop dispatches on the leading byte. Each arm either emits
//! an immediate token, skips trivia, or enters a named sub-scan
//! (string, number, identifier, line comment). Errors go to the
//! [`Reporter`] and scanning continues; a pass always reaches
//! end-of-source and surfaces every problem it met along the way.

use rill_diagnostic::Reporter;

use crate::cursor::Cursor;
use crate::keywords;
use crate::source_buffer::SourceBuffer;
use crate::token::{Literal, Token, TokenKind};

/// Single-pass scanner over one source buffer.
pub struct Scanner<'src, 'rep> {
    cursor: Cursor<'src>,
    reporter: &'rep mut Reporter,
    /// Current 1-based line, advanced on every `\n` consumed,
    /// including newlines inside string literals and after comments.
    line: u32,
}

impl<'src, 'rep> Scanner<'src, 'rep> {
    /// Create a scanner over `buffer`, reporting errors into `reporter`.
    pub fn new(buffer: &'src SourceBuffer, reporter: &'rep mut Reporter) -> Self {
        Scanner {
            cursor: buffer.cursor(),
            reporter,
            line: 1,
        }
    }

    /// Run the pass to completion and return the token stream.
    ///
    /// The stream contains no end-of-input marker; exhaustion is the
    /// signal. Check `Reporter::had_error()` before trusting the result.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        while !self.cursor.is_eof() {
            let start = self.cursor.pos();
            if let Some(token) = self.scan_token(start) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Scan one token starting at `start`.
    ///
    /// Returns `None` for trivia (whitespace, newlines, comments) and
    /// for erroneous input, which is reported and skipped.
    fn scan_token(&mut self, start: u32) -> Option<Token<'src>> {
        match self.cursor.current() {
            b'(' => Some(self.single(start, TokenKind::LeftParen)),
            b')' => Some(self.single(start, TokenKind::RightParen)),
            b'{' => Some(self.single(start, TokenKind::LeftBrace)),
            b'}' => Some(self.single(start, TokenKind::RightBrace)),
            b',' => Some(self.single(start, TokenKind::Comma)),
            b'.' => Some(self.single(start, TokenKind::Dot)),
            b'-' => Some(self.single(start, TokenKind::Minus)),
            b'+' => Some(self.single(start, TokenKind::Plus)),
            b';' => Some(self.single(start, TokenKind::Semicolon)),
            b'*' => Some(self.single(start, TokenKind::Star)),
            b'!' => Some(self.one_or_two(start, TokenKind::Bang, TokenKind::BangEqual)),
            b'=' => Some(self.one_or_two(start, TokenKind::Equal, TokenKind::EqualEqual)),
            b'<' => Some(self.one_or_two(start, TokenKind::Less, TokenKind::LessEqual)),
            b'>' => Some(self.one_or_two(start, TokenKind::Greater, TokenKind::GreaterEqual)),
            b'/' => self.slash_or_comment(start),
            b' ' | b'\r' | b'\t' => {
                self.cursor.advance();
                None
            }
            b'\n' => {
                self.cursor.advance();
                self.line += 1;
                None
            }
            b'"' => self.string(start),
            b'0'..=b'9' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Some(self.identifier(start)),
            _ => {
                self.unexpected_character(start);
                None
            }
        }
    }

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.token(start, kind)
    }

    /// `! = < >`: emit `two` if the next byte is `=`, else `one`.
    fn one_or_two(&mut self, start: u32, one: TokenKind, two: TokenKind) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, two)
        } else {
            self.token(start, one)
        }
    }

    /// `/`: line comment or division. `/=` is not an operator; it lexes
    /// as `Slash` followed by whatever comes next.
    fn slash_or_comment(&mut self, start: u32) -> Option<Token<'src>> {
        self.cursor.advance(); // consume first '/'
        if self.cursor.current() == b'/' {
            // Comment body runs to end of line; the newline itself is
            // left for the main loop so it still advances the counter.
            self.cursor.eat_until_newline_or_eof();
            None
        } else {
            Some(self.token(start, TokenKind::Slash))
        }
    }

    /// String literal. No escape sequences; newlines are legal and the
    /// literal value is the text strictly between the quotes.
    fn string(&mut self, start: u32) -> Option<Token<'src>> {
        let line = self.line;
        self.cursor.advance(); // consume opening '"'
        let closing = self.cursor.find_quote_or_eof();
        self.line += newline_count(self.cursor.slice(start + 1, self.cursor.pos()));
        if closing == 0 {
            self.reporter.error(line, "unterminated string");
            return None;
        }
        self.cursor.advance(); // consume closing '"'
        let literal = self.cursor.slice(start + 1, self.cursor.pos() - 1);
        Some(Token::with_literal(
            TokenKind::String,
            self.cursor.slice_from(start),
            Literal::Str(literal),
            line,
        ))
    }

    /// Number literal: maximal digit run, optional `. digits` fraction.
    ///
    /// A trailing `.` not followed by a digit is left for the main loop
    /// (`123.` is `Number` then `Dot`). No exponent, no sign.
    fn number(&mut self, start: u32) -> Option<Token<'src>> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let lexeme = self.cursor.slice_from(start);
        match lexeme.parse::<f64>() {
            Ok(value) => Some(Token::with_literal(
                TokenKind::Number,
                lexeme,
                Literal::Number(value),
                self.line,
            )),
            Err(_) => {
                self.reporter
                    .error(self.line, format!("invalid number literal `{lexeme}`"));
                None
            }
        }
    }

    /// Identifier or keyword: maximal alphanumeric/underscore run.
    fn identifier(&mut self, start: u32) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let lexeme = self.cursor.slice_from(start);
        let kind = keywords::lookup(lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, self.line)
    }

    /// No lexical rule matches: report, skip one full code point, continue.
    fn unexpected_character(&mut self, start: u32) {
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start);
        match text.chars().next() {
            Some(c) => self
                .reporter
                .error(self.line, format!("unexpected character `{}`", c.escape_debug())),
            None => self.reporter.error(self.line, "unexpected character"),
        }
    }

    fn token(&self, start: u32, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(start), self.line)
    }
}

/// Count `\n` bytes in `text` using SIMD-accelerated search.
#[allow(
    clippy::cast_possible_truncation,
    reason = "newline count is bounded by source length which fits in u32"
)]
fn newline_count(text: &str) -> u32 {
    memchr::memchr_iter(b'\n', text.as_bytes()).count() as u32
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan a source string and return token kinds.
    fn scan_kinds(source: &str) -> Vec<TokenKind> {
        let buffer = SourceBuffer::new(source);
        let mut reporter = Reporter::new();
        Scanner::new(&buffer, &mut reporter)
            .scan_tokens()
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    /// Helper: scan and return owned lexemes.
    fn scan_lexemes(source: &str) -> Vec<String> {
        let buffer = SourceBuffer::new(source);
        let mut reporter = Reporter::new();
        Scanner::new(&buffer, &mut reporter)
            .scan_tokens()
            .iter()
            .map(|t| t.lexeme.to_string())
            .collect()
    }

    /// Helper: scan and return each token's line.
    fn scan_lines(source: &str) -> Vec<u32> {
        let buffer = SourceBuffer::new(source);
        let mut reporter = Reporter::new();
        Scanner::new(&buffer, &mut reporter)
            .scan_tokens()
            .iter()
            .map(|t| t.line)
            .collect()
    }

    /// Helper: scan and return the diagnostic messages.
    fn scan_errors(source: &str) -> Vec<String> {
        let buffer = SourceBuffer::new(source);
        let mut reporter = Reporter::new();
        let _ = Scanner::new(&buffer, &mut reporter).scan_tokens();
        reporter
            .diagnostics()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    // ─── Empty & Trivia ──────────────────────────────────────────────

    #[test]
    fn empty_source_produces_no_tokens() {
        assert_eq!(scan_kinds(""), vec![]);
    }

    #[test]
    fn whitespace_only_produces_no_tokens() {
        assert_eq!(scan_kinds("  \t \r  "), vec![]);
        assert_eq!(scan_kinds("\n\n\n"), vec![]);
    }

    #[test]
    fn whitespace_separates_tokens() {
        assert_eq!(
            scan_kinds("1 \t2\r3"),
            vec![TokenKind::Number, TokenKind::Number, TokenKind::Number]
        );
    }

    // ─── Single-Character Tokens ─────────────────────────────────────

    #[test]
    fn single_char_symbols_one_token_per_char() {
        let source = "(){},.-+;*";
        let kinds = scan_kinds(source);
        assert_eq!(
            kinds,
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
            ]
        );
        // Token count equals character count, lexemes equal source chars.
        assert_eq!(kinds.len(), source.len());
        let lexemes = scan_lexemes(source);
        for (lexeme, c) in lexemes.iter().zip(source.chars()) {
            assert_eq!(lexeme, &c.to_string());
        }
    }

    // ─── Operators ───────────────────────────────────────────────────

    #[test]
    fn equal_equal_is_one_token() {
        assert_eq!(scan_kinds("=="), vec![TokenKind::EqualEqual]);
    }

    #[test]
    fn compound_operators() {
        assert_eq!(scan_kinds("!="), vec![TokenKind::BangEqual]);
        assert_eq!(scan_kinds("<="), vec![TokenKind::LessEqual]);
        assert_eq!(scan_kinds(">="), vec![TokenKind::GreaterEqual]);
    }

    #[test]
    fn single_operators() {
        assert_eq!(scan_kinds("!"), vec![TokenKind::Bang]);
        assert_eq!(scan_kinds("="), vec![TokenKind::Equal]);
        assert_eq!(scan_kinds("<"), vec![TokenKind::Less]);
        assert_eq!(scan_kinds(">"), vec![TokenKind::Greater]);
    }

    #[test]
    fn bang_space_equal_is_two_tokens() {
        assert_eq!(scan_kinds("! ="), vec![TokenKind::Bang, TokenKind::Equal]);
    }

    #[test]
    fn triple_equal_is_equal_equal_then_equal() {
        assert_eq!(
            scan_kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal]
        );
    }

    #[test]
    fn slash_equal_is_two_tokens() {
        // `/=` is not an operator; division is always a bare Slash.
        assert_eq!(scan_kinds("/="), vec![TokenKind::Slash, TokenKind::Equal]);
    }

    #[test]
    fn slash_alone_is_slash() {
        assert_eq!(scan_kinds("/"), vec![TokenKind::Slash]);
        assert_eq!(
            scan_kinds("6/3"),
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]
        );
    }

    // ─── Comments ────────────────────────────────────────────────────

    #[test]
    fn line_comment_produces_no_tokens() {
        assert_eq!(scan_kinds("// hello"), vec![]);
    }

    #[test]
    fn comment_then_number() {
        let buffer = SourceBuffer::new("// comment\n123");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "123");
        // The comment's trailing newline still advanced the counter.
        assert_eq!(tokens[0].line, 2);
        assert!(!reporter.had_error());
    }

    #[test]
    fn comment_at_eof_without_newline() {
        assert_eq!(scan_kinds("1 // trailing"), vec![TokenKind::Number]);
    }

    #[test]
    fn comment_swallows_operators_and_quotes() {
        assert_eq!(scan_kinds("// != \" / == \n+"), vec![TokenKind::Plus]);
    }

    // ─── Line Tracking ───────────────────────────────────────────────

    #[test]
    fn newline_increments_line() {
        assert_eq!(scan_lines("a\nb\n\nc"), vec![1, 2, 4]);
    }

    #[test]
    fn carriage_return_does_not_increment_line() {
        assert_eq!(scan_lines("a\r\nb"), vec![1, 2]);
        assert_eq!(scan_lines("a\rb"), vec![1, 1]);
    }

    // ─── Strings ─────────────────────────────────────────────────────

    #[test]
    fn string_literal_strips_quotes() {
        let buffer = SourceBuffer::new("\"hi\"");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hi\"");
        assert_eq!(tokens[0].literal, Some(Literal::Str("hi")));
    }

    #[test]
    fn empty_string_literal() {
        let buffer = SourceBuffer::new("\"\"");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens[0].literal, Some(Literal::Str("")));
    }

    #[test]
    fn multi_line_string_counts_lines_once() {
        let buffer = SourceBuffer::new("\"hello\nworld\" x");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert!(!reporter.had_error());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, Some(Literal::Str("hello\nworld")));
        // The token records the line it starts on ...
        assert_eq!(tokens[0].line, 1);
        // ... and the newline inside advanced the counter exactly once.
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string_reports_and_emits_nothing() {
        let buffer = SourceBuffer::new("\"unterminated");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens, vec![]);
        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.diagnostics()[0].message, "unterminated string");
    }

    #[test]
    fn unterminated_string_anchored_to_opening_line() {
        let buffer = SourceBuffer::new("\n\n\"abc\ndef");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert!(tokens.is_empty());
        assert_eq!(reporter.diagnostics()[0].line, 3);
    }

    #[test]
    fn adjacent_strings_scan_separately() {
        assert_eq!(
            scan_kinds("\"a\" + \"b\""),
            vec![TokenKind::String, TokenKind::Plus, TokenKind::String]
        );
    }

    // ─── Numbers ─────────────────────────────────────────────────────

    #[test]
    fn integer_literal() {
        let buffer = SourceBuffer::new("123");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
    }

    #[test]
    fn decimal_literal() {
        let buffer = SourceBuffer::new("123.45");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme, "123.45");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.45)));
    }

    #[test]
    fn trailing_dot_is_separate_token() {
        let buffer = SourceBuffer::new("123.");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn leading_dot_is_separate_token() {
        assert_eq!(scan_kinds(".5"), vec![TokenKind::Dot, TokenKind::Number]);
    }

    #[test]
    fn second_fraction_is_not_consumed() {
        assert_eq!(
            scan_lexemes("123.45.67"),
            vec!["123.45", ".", "67"]
        );
    }

    #[test]
    fn sign_is_not_part_of_number() {
        assert_eq!(
            scan_kinds("-123"),
            vec![TokenKind::Minus, TokenKind::Number]
        );
        assert_eq!(scan_kinds("+1"), vec![TokenKind::Plus, TokenKind::Number]);
    }

    // ─── Identifiers & Keywords ──────────────────────────────────────

    #[test]
    fn keyword_prefix_of_identifier_is_not_keyword() {
        let buffer = SourceBuffer::new("and andx");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::And);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "andx");
    }

    #[test]
    fn underscore_starts_identifier() {
        assert_eq!(scan_kinds("_private _ _1"), vec![TokenKind::Identifier; 3]);
    }

    #[test]
    fn identifiers_carry_no_literal() {
        let buffer = SourceBuffer::new("foo true nil");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert!(tokens.iter().all(|t| t.literal.is_none()));
    }

    #[test]
    fn statement_smoke_test() {
        assert_eq!(
            scan_kinds("var answer = 42;"),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn function_smoke_test() {
        let source = "fun add(a, b) {\n  // sum\n  return a + b;\n}\nprint add(1, 2.5) >= 3 != true;";
        assert_eq!(
            scan_kinds(source),
            vec![
                TokenKind::Fun,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::GreaterEqual,
                TokenKind::Number,
                TokenKind::BangEqual,
                TokenKind::True,
                TokenKind::Semicolon,
            ]
        );
    }

    // ─── Unexpected Characters ───────────────────────────────────────

    #[test]
    fn unexpected_character_reports_and_continues() {
        let buffer = SourceBuffer::new("a @ b");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert!(reporter.had_error());
        assert_eq!(
            reporter.diagnostics()[0].message,
            "unexpected character `@`"
        );
    }

    #[test]
    fn each_bad_character_reports_once() {
        assert_eq!(scan_errors("@#^").len(), 3);
    }

    #[test]
    fn non_ascii_character_is_one_error() {
        let errors = scan_errors("€x");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "unexpected character `€`");
        assert_eq!(scan_kinds("€x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn interior_null_is_unexpected_character() {
        let buffer = SourceBuffer::new("a\0b");
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(reporter.error_count(), 1);
    }

    #[test]
    fn error_line_is_current_line() {
        let buffer = SourceBuffer::new("ok\n@");
        let mut reporter = Reporter::new();
        let _ = Scanner::new(&buffer, &mut reporter).scan_tokens();
        assert_eq!(reporter.diagnostics()[0].line, 2);
    }

    // ─── Pass Independence ───────────────────────────────────────────

    #[test]
    fn independent_passes_agree() {
        let source = "var x = \"multi\nline\"; // note\nprint x != 1.5;";
        let first_buffer = SourceBuffer::new(source);
        let second_buffer = SourceBuffer::new(source);
        let mut first_reporter = Reporter::new();
        let mut second_reporter = Reporter::new();
        let first = Scanner::new(&first_buffer, &mut first_reporter).scan_tokens();
        let second = Scanner::new(&second_buffer, &mut second_reporter).scan_tokens();
        assert_eq!(first, second);
        assert_eq!(first_reporter, second_reporter);
    }

    #[test]
    fn token_lines_are_non_decreasing() {
        let lines = scan_lines("a\nb c\n\"x\ny\" d\ne");
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }

    // ─── Property Tests ──────────────────────────────────────────────

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scanning_never_panics_and_is_deterministic(source in any::<String>()) {
                let first_buffer = SourceBuffer::new(&source);
                let second_buffer = SourceBuffer::new(&source);
                let mut first_reporter = Reporter::new();
                let mut second_reporter = Reporter::new();
                let first = Scanner::new(&first_buffer, &mut first_reporter).scan_tokens();
                let second = Scanner::new(&second_buffer, &mut second_reporter).scan_tokens();
                prop_assert_eq!(first, second);
                prop_assert_eq!(first_reporter.error_count(), second_reporter.error_count());
            }

            #[test]
            fn token_lines_never_decrease(source in any::<String>()) {
                let buffer = SourceBuffer::new(&source);
                let mut reporter = Reporter::new();
                let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].line <= pair[1].line);
                }
            }

            #[test]
            fn symbol_soup_token_count_equals_char_count(
                symbols in proptest::collection::vec(
                    proptest::sample::select(vec![
                        '(', ')', '{', '}', ',', '.', '-', '+', ';', '*',
                    ]),
                    0..64,
                )
            ) {
                let source: String = symbols.iter().collect();
                let buffer = SourceBuffer::new(&source);
                let mut reporter = Reporter::new();
                let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
                prop_assert_eq!(tokens.len(), symbols.len());
                prop_assert!(!reporter.had_error());
                for (token, c) in tokens.iter().zip(symbols.iter()) {
                    prop_assert_eq!(token.lexeme, c.to_string());
                }
            }

            #[test]
            fn every_lexeme_is_a_source_substring(source in "[ -~\n]{0,80}") {
                let buffer = SourceBuffer::new(&source);
                let mut reporter = Reporter::new();
                let tokens = Scanner::new(&buffer, &mut reporter).scan_tokens();
                for token in &tokens {
                    prop_assert!(source.contains(token.lexeme));
                }
            }
        }
    }
}
