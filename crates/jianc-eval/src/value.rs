//! Runtime values (§3.3): the closed `Value` union the evaluator produces
//! and consumes, plus `HashKey` for the subset of values that can key a
//! hash literal.

use crate::environment::Environment;
use jianc_par::{BlockStatement, Identifier};
use jianc_util::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// A first-class runtime value. Cloning is cheap: heap-backed variants
/// (`String`, `Array`, `Hash`, `Function`) hold an `Rc`, so `Clone` is a
/// refcount bump, not a deep copy.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashObj>),
    /// A closure: params, body, and the environment in effect where the
    /// `fn` literal was evaluated (§3.3 — captured by reference, not by
    /// value; this is what makes nested closures observe outer `let`s).
    Function(Rc<FunctionObj>),
    Builtin(BuiltinFn),
    /// Internal-only wrapper used to unwind nested blocks up to a function
    /// call or program boundary (§4.3). Must never be returned from `eval`
    /// to a caller outside the evaluator itself.
    ReturnValue(Box<Value>),
    /// A first-class error sentinel. Once produced, short-circuits any
    /// enclosing evaluation (§7).
    Error(Rc<str>),
}

/// Two canonical singletons per §3.3; comparing by tag value already gives
/// reference-identity semantics since there is only one `true` and one
/// `false`.
pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);
pub const NULL: Value = Value::Null;

impl Value {
    pub fn boolean(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(Rc::from(message.into().as_str()))
    }

    /// The type tag used in error messages and `type_name()`-style
    /// diagnostics (§3.3's closed tag set).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_return_value(&self) -> bool {
        matches!(self, Value::ReturnValue(_))
    }

    /// Truthiness (§4.3): only `FALSE` and `NULL` are false. Everything
    /// else — including `0`, `""`, and `[]` — is true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// The canonical textual rendering (§6), used by `puts` and by the
    /// REPL/file-mode driver to print a program's final value.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Boolean(v) => v.to_string(),
            Value::Null => "null".to_string(),
            Value::String(s) => s.to_string(),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(Value::inspect).collect();
                format!("[{}]", rendered.join(", "))
            },
            Value::Hash(hash) => {
                let rendered: Vec<String> = hash
                    .pairs
                    .values()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                format!("{{{}}}", rendered.join(","))
            },
            Value::Function(func) => {
                let params: Vec<String> = func.params.iter().map(|p| p.to_string()).collect();
                format!("fn ({}){{\n{}\n}}", params.join(", "), func.body)
            },
            Value::Builtin(b) => format!("builtin function: {}", b.name()),
            Value::ReturnValue(inner) => inner.inspect(),
            Value::Error(message) => message.to_string(),
        }
    }

    /// Attempts to produce a `HashKey` for this value; only `Integer`,
    /// `Boolean`, and `String` are hashable (§3.3).
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(v) => Some(HashKey {
                type_tag: HashKeyType::Integer,
                hash: *v as u64,
            }),
            Value::Boolean(b) => Some(HashKey {
                type_tag: HashKeyType::Boolean,
                hash: if *b { 1 } else { 0 },
            }),
            Value::String(s) => Some(HashKey {
                type_tag: HashKeyType::String,
                hash: fnv1a_64(s.as_bytes()),
            }),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self.inspect())
    }
}

/// FNV-1a 64-bit hash over UTF-8 bytes (§3.3's string `HashKey`).
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HashKeyType {
    Integer,
    Boolean,
    String,
}

/// {type tag, 64-bit hash} (§3.3). Only used as the key of `HashObj`'s map
/// — the original key/value pair is kept alongside it so `inspect` can
/// still render the original key expression's value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HashKey {
    pub type_tag: HashKeyType,
    pub hash: u64,
}

pub struct HashObj {
    pub pairs: FxHashMap<HashKey, (Value, Value)>,
}

pub struct FunctionObj {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

/// The built-in function table (§4.3), a closed set dispatched by tag
/// rather than function pointer — `puts` needs access to the evaluator's
/// output sink, which a bare `fn(&[Value]) -> Value` can't carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuiltinFn {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl BuiltinFn {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinFn::Len => "len",
            BuiltinFn::First => "first",
            BuiltinFn::Last => "last",
            BuiltinFn::Rest => "rest",
            BuiltinFn::Push => "push",
            BuiltinFn::Puts => "puts",
        }
    }

    /// Looks up a built-in by its identifier text; `None` for any name not
    /// in the closed table (§4.3), shadowable by a user `let` of the same
    /// name since the evaluator only consults this after an env-lookup miss.
    pub fn lookup(name: &str) -> Option<BuiltinFn> {
        match name {
            "len" => Some(BuiltinFn::Len),
            "first" => Some(BuiltinFn::First),
            "last" => Some(BuiltinFn::Last),
            "rest" => Some(BuiltinFn::Rest),
            "push" => Some(BuiltinFn::Push),
            "puts" => Some(BuiltinFn::Puts),
            _ => None,
        }
    }
}
