//! jianc-util - Core utilities shared across the Jian toolchain.
//!
//! This crate provides the foundation types used by the lexer, parser,
//! evaluator, and driver crates:
//!
//! - [`symbol`]: interned identifiers (`Symbol`) backed by a global string table
//! - [`span`]: source location tracking (`Span`, `FileId`, `SourceMap`)
//! - [`diagnostic`]: structured error/warning reporting (`Diagnostic`, `Handler`)
//! - [`error`]: `thiserror`-derived error types for the utilities above
//!
//! Nothing in this crate is language-specific; `jianc-lex` and `jianc-par`
//! build the actual Jian token and AST types on top of it.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
