//! Identifier and keyword lexing.

use crate::lexer::Lexer;
use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ascii_ident_continue;

impl<'a> Lexer<'a> {
    /// Scans the maximal `[A-Za-z_][A-Za-z0-9_]*` run starting at the
    /// current character (already known to be a valid start), then looks
    /// the text up against the keyword table. Leaves the cursor on the
    /// first non-identifier byte.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.token_start();
        while is_ascii_ident_continue(self.cursor().current_char()) {
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start);
        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(self.intern_from(start)))
    }
}
