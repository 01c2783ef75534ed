//! Integer literal lexing.

use crate::lexer::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Scans the maximal run of ASCII digits starting at the current
    /// character and returns it as `Token::Int`. The lexer never evaluates
    /// the digits itself — the parser converts the literal text to an
    /// integer, and is the one that can fail on overflow.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.token_start();
        while self.cursor().current_char().is_ascii_digit() {
            self.cursor().advance();
        }
        Token::Int(self.intern_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jianc_util::{Handler, Symbol};

    fn lex_one(source: &str) -> Token {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        lexer.next_token()
    }

    #[test]
    fn single_digit() {
        assert_eq!(lex_one("5"), Token::Int(Symbol::intern("5")));
    }

    #[test]
    fn multi_digit() {
        assert_eq!(lex_one("12345"), Token::Int(Symbol::intern("12345")));
    }

    #[test]
    fn leading_zero_is_kept_verbatim() {
        assert_eq!(lex_one("007"), Token::Int(Symbol::intern("007")));
    }

    #[test]
    fn number_stops_at_first_non_digit() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("5;", &handler);
        assert_eq!(lexer.next_token(), Token::Int(Symbol::intern("5")));
        assert_eq!(lexer.next_token(), Token::Semicolon);
    }
}
