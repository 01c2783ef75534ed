//! AST node definitions (§3.2).
//!
//! The AST is a closed set of statement and expression variants plus the
//! `Program` root. A node exclusively owns its sub-nodes; `Program`
//! exclusively owns its top-level statements. Every node implements
//! `Display`, producing the textual rendering used for debugging and the
//! parser round-trip property (§8): infix expressions render parenthesized
//! (`(a + b)`), prefix expressions as `(-a)`, index expressions as `(a[i])`,
//! `let` statements as `let NAME = VALUE;`, `return` statements as
//! `return VALUE;`.

use jianc_util::Symbol;
use std::fmt;

/// The root of a parsed source file: an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

/// A bare identifier, both as a standalone expression and as the `name` of
/// a `let` statement or function parameter (§3.2 invariant: `LetStatement`'s
/// name is always an `Identifier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier {
    pub name: Symbol,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{s}"),
            Statement::Return(s) => write!(f, "{s}"),
            Statement::Expression(s) => write!(f, "{s}"),
            Statement::Block(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub value: Expression,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub expr: Expression,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// A braced sequence of statements: an `if`/`else` arm or a function body.
#[derive(Debug, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(Symbol),
    Boolean(bool),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    FunctionLiteral(FunctionLiteral),
    Call(CallExpression),
    ArrayLiteral(ArrayLiteral),
    Index(IndexExpression),
    HashLiteral(HashLiteral),
    /// Placeholder left behind when a sub-expression fails to parse; lets
    /// the parser keep going past a local failure (§4.2) instead of
    /// aborting the whole statement.
    Invalid,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(id) => write!(f, "{id}"),
            Expression::IntegerLiteral(v) => write!(f, "{v}"),
            Expression::StringLiteral(s) => write!(f, "{s}"),
            Expression::Boolean(b) => write!(f, "{b}"),
            Expression::Prefix(p) => write!(f, "{p}"),
            Expression::Infix(i) => write!(f, "{i}"),
            Expression::If(i) => write!(f, "{i}"),
            Expression::FunctionLiteral(fl) => write!(f, "{fl}"),
            Expression::Call(c) => write!(f, "{c}"),
            Expression::ArrayLiteral(a) => write!(f, "{a}"),
            Expression::Index(i) => write!(f, "{i}"),
            Expression::HashLiteral(h) => write!(f, "{h}"),
            Expression::Invalid => write!(f, "<invalid>"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub operator: &'static str,
    pub right: Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The reference source this parser descends from prints the
        // condition twice; fixed here to print it once (§9).
        write!(f, "if {} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, " else {alt}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "fn({}) {{\n{}\n}}", params.join(", "), self.body)
    }
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.function, args.join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", elements.join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

/// An ordered sequence of key/value expression pairs (§3.2 invariant:
/// source order is preserved; logical key uniqueness is not enforced here).
#[derive(Debug, Clone, Default)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
}

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn let_statement_renders_with_trailing_semicolon() {
        let stmt = LetStatement {
            name: Identifier {
                name: Symbol::intern("myVar"),
            },
            value: Expression::Identifier(Identifier {
                name: Symbol::intern("anotherVar"),
            }),
        };
        assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn infix_expression_is_parenthesized() {
        let expr = Expression::Infix(InfixExpression {
            left: Box::new(Expression::IntegerLiteral(1)),
            operator: "+".to_string(),
            right: Box::new(Expression::IntegerLiteral(2)),
        });
        assert_eq!(expr.to_string(), "(1 + 2)");
    }

    #[test]
    fn prefix_expression_is_parenthesized() {
        let expr = Expression::Prefix(PrefixExpression {
            operator: "-",
            right: Box::new(Expression::Identifier(Identifier {
                name: Symbol::intern("a"),
            })),
        });
        assert_eq!(expr.to_string(), "(-a)");
    }

    #[test]
    fn index_expression_renders_with_brackets_inside_parens() {
        let expr = Expression::Index(IndexExpression {
            left: Box::new(Expression::Identifier(Identifier {
                name: Symbol::intern("myArray"),
            })),
            index: Box::new(Expression::Infix(InfixExpression {
                left: Box::new(Expression::IntegerLiteral(1)),
                operator: "+".to_string(),
                right: Box::new(Expression::IntegerLiteral(1)),
            })),
        });
        assert_eq!(expr.to_string(), "(myArray[(1 + 1)])");
    }

    #[test]
    fn if_expression_prints_condition_once() {
        let expr = IfExpression {
            condition: Box::new(Expression::Boolean(true)),
            consequence: BlockStatement {
                statements: vec![Statement::Expression(ExpressionStatement {
                    expr: Expression::IntegerLiteral(1),
                })],
            },
            alternative: None,
        };
        assert_eq!(expr.to_string(), "if true 1");
    }
}
