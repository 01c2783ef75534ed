//! jianc-lex - Lexical analyzer for the Jian language (§4.1).
//!
//! Converts source text into a stream of [`Token`]s. The lexer is total: it
//! never panics and never gets stuck, surfacing any byte it cannot classify
//! as `Token::Illegal` and reporting a diagnostic through the caller-owned
//! [`jianc_util::Handler`].
//!
//! - [`cursor`]: UTF-8-aware character cursor with line/column tracking
//! - [`token`]: the closed [`Token`] kind set
//! - [`lexer`]: the `Lexer` struct and its per-character dispatch

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token};
