//! Keyword resolution.
//!
//! The identifier sub-scan consumes a maximal alphanumeric run and then
//! asks this table whether the lexeme is a reserved word. The lookup
//! uses the lexeme's length as a first-pass filter (keywords range from
//! 2-6 chars), then matches against the specific keywords of that
//! length. Because the lookup runs on the *maximal* run, a keyword
//! prefix of a longer identifier (`and` vs `andx`) never matches.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a keyword,
/// `None` if it's a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-6 chars and start with a lowercase letter
    if !(2..=6).contains(&len) {
        return None;
    }
    if !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "for" => Some(TokenKind::For),
            "fun" => Some(TokenKind::Fun),
            "nil" => Some(TokenKind::Nil),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_keyword_resolves() {
        let cases = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("fun", TokenKind::Fun),
            ("for", TokenKind::For),
            ("if", TokenKind::If),
            ("nil", TokenKind::Nil),
            ("or", TokenKind::Or),
            ("print", TokenKind::Print),
            ("return", TokenKind::Return),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("true", TokenKind::True),
            ("var", TokenKind::Var),
            ("while", TokenKind::While),
        ];
        for (text, kind) in cases {
            assert_eq!(lookup(text), Some(kind), "keyword {text:?}");
        }
    }

    #[test]
    fn identifiers_do_not_resolve() {
        for text in ["andx", "classes", "iff", "x", "foo", "Return", "AND"] {
            assert_eq!(lookup(text), None, "identifier {text:?}");
        }
    }

    #[test]
    fn length_guard_rejects_out_of_range() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("a"), None);
        assert_eq!(lookup("notakeyword"), None);
    }

    #[test]
    fn underscore_prefixed_never_matches() {
        assert_eq!(lookup("_if"), None);
        assert_eq!(lookup("_and"), None);
    }
}
