//! jianc-eval - Tree-walking evaluator for the Jian language (§4.3).
//!
//! Walks a [`jianc_par::Program`] against a lexically-scoped
//! [`Environment`], producing a first-class [`Value`] — including
//! closures, arrays, hashes, and an error-as-value channel that
//! short-circuits through every composite construct without unwinding the
//! host call stack.
//!
//! - [`value`]: the runtime `Value` union, `HashKey`, and the built-in
//!   function tags
//! - [`environment`]: the parent-chained name-to-value store
//! - [`builtins`]: `len`/`first`/`last`/`rest`/`push`/`puts`
//! - [`eval`]: the recursive AST walker

pub mod builtins;
pub mod environment;
pub mod eval;
pub mod value;

pub use environment::Environment;
pub use eval::Evaluator;
pub use value::{BuiltinFn, FunctionObj, HashKey, HashObj, Value, FALSE, NULL, TRUE};
