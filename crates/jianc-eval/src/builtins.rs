//! The built-in function table (§4.3): a small, immutable, arity-checked
//! set of native functions consulted only after an environment lookup
//! misses — which is also what lets a program shadow one with its own
//! `let`.

use crate::value::{BuiltinFn, Value};
use std::fmt::Write as _;
use std::io::Write;
use std::rc::Rc;

/// Dispatches a built-in call. `output` is the sink `puts` writes to; a
/// real driver hands in stdout, tests hand in an in-memory buffer so
/// side-effect sequences stay assertable (§8's determinism property).
pub fn call(builtin: BuiltinFn, args: &[Value], output: &mut dyn Write) -> Value {
    match builtin {
        BuiltinFn::Len => len(args),
        BuiltinFn::First => first(args),
        BuiltinFn::Last => last(args),
        BuiltinFn::Rest => rest(args),
        BuiltinFn::Push => push(args),
        BuiltinFn::Puts => puts(args, output),
    }
}

fn wrong_arg_count(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn wrong_arg_type(fn_name: &str, expected: &str, got: &Value) -> Value {
    Value::error(format!(
        "argument to '{fn_name}' must be {expected}, got {}",
        got.type_name()
    ))
}

fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!("argument to 'len' not supported, got {}", other.type_name())),
    }
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => wrong_arg_type("first", "ARRAY", other),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => wrong_arg_type("last", "ARRAY", other),
    }
}

fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arg_count(args.len(), 1);
    }
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        },
        other => wrong_arg_type("rest", "ARRAY", other),
    }
}

fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arg_count(args.len(), 2);
    }
    match &args[0] {
        Value::Array(elements) => {
            let mut new_elements = elements.as_ref().clone();
            new_elements.push(args[1].clone());
            Value::Array(Rc::new(new_elements))
        },
        other => wrong_arg_type("push", "ARRAY", other),
    }
}

fn puts(args: &[Value], output: &mut dyn Write) -> Value {
    let mut line = String::new();
    for arg in args {
        line.clear();
        let _ = write!(line, "{}", arg.inspect());
        let _ = writeln!(output, "{line}");
    }
    Value::Null
}
