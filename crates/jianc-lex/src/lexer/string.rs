//! String literal lexing.

use crate::lexer::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Scans a string literal: everything between the opening `"` and the
    /// next unescaped `"` (or end of input), with no escape processing —
    /// `\n` inside a string literal is a literal backslash followed by `n`,
    /// matching the reference lexer's byte-for-byte scan. An unterminated
    /// string (input ends before the closing quote) still yields a `Str`
    /// token carrying whatever was scanned, so the lexer stays total; it
    /// additionally reports a diagnostic for the condition.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor().advance(); // opening quote
        let start = self.cursor().position();

        while self.cursor().current_char() != '"' && !self.cursor().is_at_end() {
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start);

        if self.cursor().is_at_end() {
            self.report_unterminated_string();
        } else {
            self.cursor().advance(); // closing quote
        }

        Token::Str(jianc_util::Symbol::intern(text))
    }
}
