//! Block statement parsing and the comma-separated list helpers shared by
//! function parameters, call arguments, array elements, and hash pairs.

use crate::ast::{BlockStatement, Expression, Identifier};
use crate::{Parser, Precedence};
use jianc_lex::Token;

impl<'a> Parser<'a> {
    /// Parses a `{ ... }` block. Assumes `cur_token` is `{`; advances past
    /// it and repeatedly parses statements until `}` or `EOF`.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_token_is(&Token::RBrace) && !self.cur_token_is(&Token::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }

    /// `(p1, p2, ...)` — comma-separated identifiers, empty allowed.
    /// Assumes `cur_token` is `(`.
    pub(crate) fn parse_function_parameters(&mut self) -> Vec<Identifier> {
        let mut params = Vec::new();

        if self.peek_token_is(&Token::RParen) {
            self.next_token();
            return params;
        }

        self.next_token();
        params.push(self.parse_identifier_param());

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            params.push(self.parse_identifier_param());
        }

        let _ = self.expect_peek(Token::RParen);

        params
    }

    fn parse_identifier_param(&mut self) -> Identifier {
        match self.cur_token() {
            Token::Ident(sym) => Identifier { name: *sym },
            _ => {
                self.push_error(format!(
                    "expected function parameter to be an identifier, got {} instead",
                    self.cur_token().kind_name()
                ));
                Identifier {
                    name: jianc_util::Symbol::intern(""),
                }
            },
        }
    }

    /// A comma-separated list of expressions terminated by `end`. Assumes
    /// `cur_token` is the opening delimiter (`(`, `[`); used for call
    /// arguments and array literal elements.
    pub(crate) fn parse_expression_list(&mut self, end: Token) -> Vec<Expression> {
        let mut list = Vec::new();

        if self.peek_token_is(&end) {
            self.next_token();
            return list;
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest));

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest));
        }

        let _ = self.expect_peek(end);

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jianc_lex::Lexer;
    use jianc_util::Handler;

    fn parse(source: &str) -> crate::Program {
        let handler = Handler::new();
        let lexer = Lexer::new(source, &handler);
        let mut parser = Parser::new(lexer, &handler);
        parser.parse_program()
    }

    #[test]
    fn empty_block_parses_to_no_statements() {
        let program = parse("if (true) {}");
        match &program.statements[0] {
            crate::Statement::Expression(es) => match &es.expr {
                Expression::If(if_expr) => {
                    assert!(if_expr.consequence.statements.is_empty());
                },
                other => panic!("expected if expression, got {other}"),
            },
            other => panic!("expected expression statement, got {other}"),
        }
    }

    #[test]
    fn function_with_no_parameters() {
        let program = parse("fn() { 1; };");
        match &program.statements[0] {
            crate::Statement::Expression(es) => match &es.expr {
                Expression::FunctionLiteral(fl) => assert!(fl.params.is_empty()),
                other => panic!("expected function literal, got {other}"),
            },
            other => panic!("expected expression statement, got {other}"),
        }
    }

    #[test]
    fn function_parameters_parse_in_order() {
        let program = parse("fn(x, y, z) {};");
        match &program.statements[0] {
            crate::Statement::Expression(es) => match &es.expr {
                Expression::FunctionLiteral(fl) => {
                    let names: Vec<_> = fl.params.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(names, vec!["x", "y", "z"]);
                },
                other => panic!("expected function literal, got {other}"),
            },
            other => panic!("expected expression statement, got {other}"),
        }
    }
}
