//! jianc-par - Pratt parser for the Jian language (§4.2).
//!
//! Builds a [`Program`] AST from a [`jianc_lex::Lexer`]'s token stream.
//! Parsing never aborts on a local failure: the parser records a textual
//! message in `errors()` and leaves an [`ast::Expression::Invalid`] sentinel
//! in place of the unparseable node, so a caller always gets a `Program`
//! back alongside whatever errors accumulated — it's the caller's job to
//! check `errors()` before handing the program to the evaluator.
//!
//! - [`ast`]: the closed statement/expression node set
//! - [`expr`]: the Pratt expression core — precedence table, prefix/infix
//!   dispatch, and every expression-parsing method

pub mod ast;
pub mod expr;
pub mod stmt;

pub use ast::*;
pub use expr::Precedence;

use jianc_lex::{Lexer, Token};
use jianc_util::diagnostic::DiagnosticCode;
use jianc_util::{DiagnosticBuilder, Handler, Span};

/// A Pratt parser holding a lexer, a two-token lookahead window (`cur`,
/// `peek`), and the accumulated error list (§4.2).
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    handler: &'a Handler,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>, handler: &'a Handler) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            handler,
            cur_token,
            peek_token,
            errors: Vec::new(),
        }
    }

    /// Parser error messages accumulated so far. Non-empty means the
    /// returned `Program` may contain `Expression::Invalid` placeholders.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Parses the whole token stream into a `Program`, continuing past
    /// statement-level failures rather than stopping at the first one.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_token_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        Program { statements }
    }

    pub(crate) fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    pub(crate) fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    pub(crate) fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub(crate) fn cur_token_is(&self, tok: &Token) -> bool {
        &self.cur_token == tok
    }

    pub(crate) fn peek_token_is(&self, tok: &Token) -> bool {
        &self.peek_token == tok
    }

    /// If `peek_token` matches `expected`, advances and returns `true`;
    /// otherwise records a "expected next token" error and returns `false`
    /// without consuming anything.
    pub(crate) fn expect_peek(&mut self, expected: Token) -> bool {
        if self.peek_token_is(&expected) {
            self.next_token();
            true
        } else {
            self.peek_error(&expected);
            false
        }
    }

    fn peek_error(&mut self, expected: &Token) {
        let message = format!(
            "expected next token to be {}, got {} instead",
            expected.kind_name(),
            self.peek_token.kind_name()
        );
        self.errors.push(message.clone());
        DiagnosticBuilder::error(message)
            .code(DiagnosticCode::E_PARSER_EXPECTED_TOKEN)
            .span(Span::DUMMY)
            .emit(self.handler);
    }

    pub(crate) fn no_prefix_parse_fn_error(&mut self, tok: &Token) {
        let message = format!("no prefix parse function for {} found", tok.kind_name());
        self.errors.push(message.clone());
        DiagnosticBuilder::error(message)
            .code(DiagnosticCode::E_PARSER_NO_PREFIX_FN)
            .span(Span::DUMMY)
            .emit(self.handler);
    }

    pub(crate) fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let IDENT = EXPR;` — expects `IDENT` as peek (records an error and
    /// aborts the statement on mismatch), then `=`, then an expression at
    /// `LOWEST` precedence, then consumes an optional trailing `;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let Token::Ident(name_sym) = self.peek_token else {
            self.peek_error(&Token::Ident(jianc_util::Symbol::intern("")));
            return None;
        };
        self.next_token();
        let name = ast::Identifier { name: name_sym };

        if !self.expect_peek(Token::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let(LetStatement { name, value }))
    }

    /// `return EXPR;` — advances past `return`, parses an expression at
    /// `LOWEST`, consumes an optional trailing `;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement { value }))
    }

    /// Parses an expression at `LOWEST` and consumes an optional trailing
    /// `;` — this is the fallback for any statement not starting with
    /// `let` or `return`.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(&Token::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { expr }))
    }
}
