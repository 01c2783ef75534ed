//! Lexically-scoped variable bindings (§4.3).
//!
//! An `Environment` is a cheap-to-clone handle (`Rc<RefCell<..>>`) onto a
//! store plus an optional parent. Function calls open an environment
//! enclosed by the function's *captured* environment — not the caller's —
//! which is what gives closures their lexical (rather than dynamic) scope.

use crate::value::Value;
use jianc_util::{FxHashMap, Symbol};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

struct EnvironmentData {
    store: FxHashMap<Symbol, Value>,
    parent: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: FxHashMap::default(),
            parent: None,
        })))
    }

    /// A child scope whose lookups fall through to `parent` on a local miss.
    pub fn enclosed(parent: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(EnvironmentData {
            store: FxHashMap::default(),
            parent: Some(parent.clone()),
        })))
    }

    /// Walks the parent chain outward; `None` means "not bound anywhere",
    /// which the evaluator falls through to the builtin table for.
    pub fn get(&self, name: Symbol) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(value) = data.store.get(&name) {
            Some(value.clone())
        } else {
            data.parent.as_ref().and_then(|p| p.get(name))
        }
    }

    /// Binds `name` in *this* scope only (§4.3: `let` never mutates an
    /// outer scope's binding, it always introduces a new one here).
    pub fn set(&self, name: Symbol, value: Value) {
        self.0.borrow_mut().store.insert(name, value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
