//! Token kinds produced by the lexer.
//!
//! The token set is closed: every token the lexer can produce is listed
//! here. `Ident`, `Int`, and `Str` carry the token's literal text as an
//! interned [`Symbol`] so the parser and evaluator can compare and print it
//! without re-reading the source.

use jianc_util::Symbol;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    Illegal(char),
    Eof,

    Ident(Symbol),
    Int(Symbol),
    Str(Symbol),

    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,

    Lt,
    Gt,
    Eq,
    NotEq,

    Comma,
    Semicolon,
    Colon,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// The stable name used in diagnostics (e.g. "no prefix parse function
    /// for IDENT found"), independent of the token's literal text.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Bang => "!",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Eq => "==",
            Token::NotEq => "!=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Colon => ":",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(c) => write!(f, "{c}"),
            Token::Eof => write!(f, ""),
            Token::Ident(s) | Token::Int(s) | Token::Str(s) => write!(f, "{s}"),
            Token::Assign => write!(f, "="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Bang => write!(f, "!"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Eq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Colon => write!(f, ":"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Function => write!(f, "fn"),
            Token::Let => write!(f, "let"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::If => write!(f, "if"),
            Token::Else => write!(f, "else"),
            Token::Return => write!(f, "return"),
        }
    }
}

/// Looks up a keyword token for an already-scanned identifier, per the
/// language's closed keyword table (`fn`, `let`, `true`, `false`, `if`,
/// `else`, `return`). Returns `None` for ordinary identifiers.
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    match ident {
        "fn" => Some(Token::Function),
        "let" => Some(Token::Let),
        "true" => Some(Token::True),
        "false" => Some(Token::False),
        "if" => Some(Token::If),
        "else" => Some(Token::Else),
        "return" => Some(Token::Return),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_covers_every_keyword() {
        assert_eq!(keyword_from_ident("fn"), Some(Token::Function));
        assert_eq!(keyword_from_ident("let"), Some(Token::Let));
        assert_eq!(keyword_from_ident("true"), Some(Token::True));
        assert_eq!(keyword_from_ident("false"), Some(Token::False));
        assert_eq!(keyword_from_ident("if"), Some(Token::If));
        assert_eq!(keyword_from_ident("else"), Some(Token::Else));
        assert_eq!(keyword_from_ident("return"), Some(Token::Return));
    }

    #[test]
    fn non_keyword_identifier_is_not_a_keyword() {
        assert_eq!(keyword_from_ident("foobar"), None);
        assert_eq!(keyword_from_ident("Fn"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn display_matches_literal_text() {
        assert_eq!(Token::Plus.to_string(), "+");
        assert_eq!(Token::NotEq.to_string(), "!=");
        assert_eq!(Token::Ident(Symbol::intern("x")).to_string(), "x");
    }

    #[test]
    fn kind_name_is_stable_for_diagnostics() {
        assert_eq!(Token::Ident(Symbol::intern("x")).kind_name(), "IDENT");
        assert_eq!(Token::Int(Symbol::intern("5")).kind_name(), "INT");
        assert_eq!(Token::LParen.kind_name(), "(");
    }
}
