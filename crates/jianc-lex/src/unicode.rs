//! Character classification for the lexer.
//!
//! The language's identifier rule is the conventional ASCII one —
//! `[A-Za-z_][A-Za-z0-9_]*` — not a Unicode-aware rule; the reference
//! lexer this workspace descends from only continues identifiers on
//! letters, silently truncating names like `foo1`. That is treated as a
//! bug here rather than behavior worth preserving.

/// Checks if a character is valid as the start of an identifier.
///
/// # Example
///
/// ```
/// use jianc_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('1'));
/// ```
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// # Example
///
/// ```
/// use jianc_lex::unicode::is_ascii_ident_continue;
///
/// assert!(is_ascii_ident_continue('a'));
/// assert!(is_ascii_ident_continue('1'));
/// assert!(is_ascii_ident_continue('_'));
/// assert!(!is_ascii_ident_continue('+'));
/// ```
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
