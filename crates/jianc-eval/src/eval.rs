//! The tree-walking evaluator (§4.3): `eval(node, env) -> Value`, threaded
//! recursively through every AST node. Errors are ordinary `Value`s that
//! short-circuit by early return rather than unwinding the host stack, and
//! `ReturnValue` is an internal-only wrapper that `eval_block_statement`
//! deliberately leaves intact so a `return` inside nested `if`s unwinds all
//! the way to the nearest function call or program boundary.

use crate::builtins;
use crate::environment::Environment;
use crate::value::{BuiltinFn, FunctionObj, HashObj, Value, NULL};
use jianc_par::{
    BlockStatement, Expression, IfExpression, InfixExpression, PrefixExpression, Program,
    Statement,
};
use jianc_util::FxHashMap;
use std::io::Write;
use std::rc::Rc;

/// Holds nothing but the output sink `puts` writes through; all variable
/// state lives in the `Environment` threaded through each call (§3.4).
pub struct Evaluator<'a> {
    output: &'a mut dyn Write,
}

impl<'a> Evaluator<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        Evaluator { output }
    }

    /// Top-level entry point: runs every statement in order, unwrapping a
    /// `ReturnValue` the moment one surfaces instead of letting it escape
    /// (§4.3 — `Program` unwraps, `Block` does not).
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> Value {
        let mut result = NULL;
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env);
            match result {
                Value::ReturnValue(inner) => return *inner,
                Value::Error(_) => return result,
                _ => {},
            }
        }
        result
    }

    /// Like `eval_program` but does NOT unwrap `ReturnValue` — the wrapper
    /// passes through untouched so an enclosing block, function call, or
    /// program boundary further out can do the unwrapping (§4.3).
    fn eval_block_statement(&mut self, block: &BlockStatement, env: &Environment) -> Value {
        let mut result = NULL;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env);
            if result.is_return_value() || result.is_error() {
                return result;
            }
        }
        result
    }

    fn eval_statement(&mut self, stmt: &Statement, env: &Environment) -> Value {
        match stmt {
            Statement::Let(let_stmt) => {
                let value = self.eval_expression(&let_stmt.value, env);
                if value.is_error() {
                    return value;
                }
                env.set(let_stmt.name.name, value);
                NULL
            },
            Statement::Return(return_stmt) => {
                let value = self.eval_expression(&return_stmt.value, env);
                if value.is_error() {
                    return value;
                }
                Value::ReturnValue(Box::new(value))
            },
            Statement::Expression(expr_stmt) => self.eval_expression(&expr_stmt.expr, env),
            Statement::Block(block) => self.eval_block_statement(block, env),
        }
    }

    fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> Value {
        match expr {
            Expression::Identifier(id) => self.eval_identifier(id.name, env),
            Expression::IntegerLiteral(v) => Value::Integer(*v),
            Expression::StringLiteral(sym) => Value::string(sym.as_str()),
            Expression::Boolean(b) => Value::boolean(*b),
            Expression::Prefix(p) => self.eval_prefix_expression(p, env),
            Expression::Infix(i) => self.eval_infix_expression(i, env),
            Expression::If(i) => self.eval_if_expression(i, env),
            Expression::FunctionLiteral(fl) => Value::Function(Rc::new(FunctionObj {
                params: fl.params.clone(),
                body: fl.body.clone(),
                env: env.clone(),
            })),
            Expression::Call(call) => self.eval_call_expression(call, env),
            Expression::ArrayLiteral(arr) => self.eval_array_literal(arr, env),
            Expression::Index(idx) => self.eval_index_expression(idx, env),
            Expression::HashLiteral(h) => self.eval_hash_literal(h, env),
            Expression::Invalid => {
                Value::error("cannot evaluate an expression the parser failed to produce")
            },
        }
    }

    fn eval_identifier(&mut self, name: jianc_util::Symbol, env: &Environment) -> Value {
        if let Some(value) = env.get(name) {
            return value;
        }
        if let Some(builtin) = BuiltinFn::lookup(name.as_str()) {
            return Value::Builtin(builtin);
        }
        Value::error(format!("identifier not found: {}", name.as_str()))
    }

    fn eval_prefix_expression(&mut self, expr: &PrefixExpression, env: &Environment) -> Value {
        let right = self.eval_expression(&expr.right, env);
        if right.is_error() {
            return right;
        }
        match expr.operator {
            "!" => Value::boolean(!right.is_truthy()),
            "-" => match right {
                Value::Integer(v) => Value::Integer(-v),
                other => Value::error(format!("unknown operator: -{}", other.type_name())),
            },
            other => unreachable!("parser only produces ! and - prefix operators, got {other}"),
        }
    }

    fn eval_infix_expression(&mut self, expr: &InfixExpression, env: &Environment) -> Value {
        let left = self.eval_expression(&expr.left, env);
        if left.is_error() {
            return left;
        }
        let right = self.eval_expression(&expr.right, env);
        if right.is_error() {
            return right;
        }
        apply_infix(&expr.operator, left, right)
    }

    fn eval_if_expression(&mut self, expr: &IfExpression, env: &Environment) -> Value {
        let condition = self.eval_expression(&expr.condition, env);
        if condition.is_error() {
            return condition;
        }
        if condition.is_truthy() {
            self.eval_block_statement(&expr.consequence, env)
        } else if let Some(alt) = &expr.alternative {
            self.eval_block_statement(alt, env)
        } else {
            NULL
        }
    }

    fn eval_call_expression(&mut self, call: &jianc_par::CallExpression, env: &Environment) -> Value {
        let callee = self.eval_expression(&call.function, env);
        if callee.is_error() {
            return callee;
        }

        if let Value::Function(func) = &callee {
            if func.params.len() != call.arguments.len() {
                return Value::error(format!(
                    "invalid argument length; expected {}, got {}",
                    func.params.len(),
                    call.arguments.len()
                ));
            }
        }

        let mut args = Vec::with_capacity(call.arguments.len());
        for arg_expr in &call.arguments {
            let value = self.eval_expression(arg_expr, env);
            if value.is_error() {
                return value;
            }
            args.push(value);
        }

        match callee {
            Value::Function(func) => self.apply_function(&func, args),
            Value::Builtin(builtin) => builtins::call(builtin, &args, self.output),
            other => Value::error(format!("not a function: {}", other.type_name())),
        }
    }

    /// Binds each parameter in a fresh scope enclosed by the function's
    /// *captured* environment (not the caller's — §3.4/§4.3 lexical
    /// scoping), evaluates the body, and unwraps a possible `ReturnValue`
    /// so it doesn't keep propagating past the call boundary.
    fn apply_function(&mut self, func: &FunctionObj, args: Vec<Value>) -> Value {
        let call_env = Environment::enclosed(&func.env);
        for (param, arg) in func.params.iter().zip(args) {
            call_env.set(param.name, arg);
        }
        let result = self.eval_block_statement(&func.body, &call_env);
        match result {
            Value::ReturnValue(inner) => *inner,
            other => other,
        }
    }

    fn eval_array_literal(&mut self, arr: &jianc_par::ArrayLiteral, env: &Environment) -> Value {
        let mut elements = Vec::with_capacity(arr.elements.len());
        for elem_expr in &arr.elements {
            let value = self.eval_expression(elem_expr, env);
            if value.is_error() {
                return value;
            }
            elements.push(value);
        }
        Value::Array(Rc::new(elements))
    }

    fn eval_index_expression(&mut self, idx: &jianc_par::IndexExpression, env: &Environment) -> Value {
        let left = self.eval_expression(&idx.left, env);
        if left.is_error() {
            return left;
        }
        let index = self.eval_expression(&idx.index, env);
        if index.is_error() {
            return index;
        }

        match (&left, &index) {
            (Value::Array(elements), Value::Integer(i)) => {
                if *i < 0 || *i as usize >= elements.len() {
                    NULL
                } else {
                    elements[*i as usize].clone()
                }
            },
            (Value::Hash(hash), key) => match key.hash_key() {
                Some(hash_key) => hash
                    .pairs
                    .get(&hash_key)
                    .map(|(_, v)| v.clone())
                    .unwrap_or(NULL),
                None => Value::error(format!("unusable as hash key: {}", key.type_name())),
            },
            _ => Value::error(format!("index operator not supported: {}", left.type_name())),
        }
    }

    fn eval_hash_literal(&mut self, literal: &jianc_par::HashLiteral, env: &Environment) -> Value {
        let mut pairs = FxHashMap::default();
        for (key_expr, value_expr) in &literal.pairs {
            let key = self.eval_expression(key_expr, env);
            if key.is_error() {
                return key;
            }
            let value = self.eval_expression(value_expr, env);
            if value.is_error() {
                return value;
            }
            let hash_key = match key.hash_key() {
                Some(hk) => hk,
                None => return Value::error(format!("unusable as hash key: {}", key.type_name())),
            };
            pairs.insert(hash_key, (key, value));
        }
        Value::Hash(Rc::new(HashObj { pairs }))
    }
}

/// Integer/string arithmetic and comparisons, plus the boolean/null
/// identity-equality fallback (§4.3). Split out of `Evaluator` since it
/// needs no environment or recursive `eval` call.
fn apply_infix(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => apply_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => apply_string_infix(operator, l, r),
        _ if std::mem::discriminant(&left) != std::mem::discriminant(&right) => Value::error(
            format!(
                "type mismatch: {} {operator} {}",
                left.type_name(),
                right.type_name()
            ),
        ),
        _ => match operator {
            "==" => Value::boolean(values_identical(&left, &right)),
            "!=" => Value::boolean(!values_identical(&left, &right)),
            _ => Value::error(format!(
                "unknown operator: {} {operator} {}",
                left.type_name(),
                right.type_name()
            )),
        },
    }
}

/// `==`/`!=` on anything other than Integer/String compares by reference
/// identity of the canonical `TRUE`/`FALSE`/`NULL` singletons, which for a
/// two-valued Boolean and a one-valued Null is equivalent to value equality.
fn values_identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

fn apply_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::error("division by zero")
            } else {
                Value::Integer(left / right)
            }
        },
        "<" => Value::boolean(left < right),
        ">" => Value::boolean(left > right),
        "==" => Value::boolean(left == right),
        "!=" => Value::boolean(left != right),
        other => Value::error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn apply_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::string(format!("{left}{right}")),
        "==" => Value::boolean(left == right),
        "!=" => Value::boolean(left != right),
        other => Value::error(format!("unknown operator: STRING {other} STRING")),
    }
}
