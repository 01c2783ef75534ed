//! String interning for identifiers and string literals.
//!
//! A [`Symbol`] is a compact (4-byte) handle to a string stored in a global
//! string table. This gives O(1) comparison for identifiers and string
//! literals instead of repeated `String` comparisons through the lexer,
//! parser, and evaluator.
//!
//! # Examples
//!
//! ```
//! use jianc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("foobar");
//! let s2 = Symbol::intern("foobar");
//! assert_eq!(s1, s2);
//! assert_eq!(s1.as_str(), "foobar");
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner, useful for profiling REPL sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    pub count: usize,
    pub capacity: usize,
    pub collisions: usize,
    pub hits: usize,
    pub misses: usize,
}

impl InternerStats {
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// An interned string identifier.
///
/// `Symbol` is exactly 4 bytes, cheap to copy and compare, and has `'static`
/// lifetime — the backing string table never evicts entries.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    pub(crate) index: u32,
}

/// Symbols with index below this value are pre-interned keywords/builtins.
const RESERVED_SYMBOLS_END: u32 = 64;

pub const KW_FN: Symbol = Symbol { index: 0 };
pub const KW_LET: Symbol = Symbol { index: 1 };
pub const KW_TRUE: Symbol = Symbol { index: 2 };
pub const KW_FALSE: Symbol = Symbol { index: 3 };
pub const KW_IF: Symbol = Symbol { index: 4 };
pub const KW_ELSE: Symbol = Symbol { index: 5 };
pub const KW_RETURN: Symbol = Symbol { index: 6 };

/// Names of the built-in functions (§4.3), pre-interned so the evaluator's
/// built-in table can be built from constants instead of re-interning on
/// every lookup miss.
pub const ID_LEN: Symbol = Symbol { index: 7 };
pub const ID_FIRST: Symbol = Symbol { index: 8 };
pub const ID_LAST: Symbol = Symbol { index: 9 };
pub const ID_REST: Symbol = Symbol { index: 10 };
pub const ID_PUSH: Symbol = Symbol { index: 11 };
pub const ID_PUTS: Symbol = Symbol { index: 12 };

impl Symbol {
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Interns a string, returning its symbol. O(1) on both hit and miss.
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Resolves the symbol back to its string. O(n) in the number of
    /// interned strings; avoid in hot loops, prefer `eq_str` for comparison.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// True for a symbol pre-interned at startup (a keyword or built-in name).
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// # Safety
    /// `index` must correspond to an entry already present in the string
    /// table, or `as_str` on the result is meaningless.
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Looks up a keyword literal against the language's closed keyword set
    /// (§4.1); anything else is interned as an ordinary identifier.
    #[inline]
    pub fn keyword_or_ident(string: &str) -> Self {
        match string {
            "fn" => KW_FN,
            "let" => KW_LET,
            "true" => KW_TRUE,
            "false" => KW_FALSE,
            "if" => KW_IF,
            "else" => KW_ELSE,
            "return" => KW_RETURN,
            _ => Self::intern(string),
        }
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn intern_same_string_returns_same_symbol() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
    }

    #[test]
    fn display_and_debug() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn keyword_or_ident_resolves_known_keywords() {
        assert_eq!(Symbol::keyword_or_ident("fn"), KW_FN);
        assert_eq!(Symbol::keyword_or_ident("let"), KW_LET);
        assert_eq!(Symbol::keyword_or_ident("return"), KW_RETURN);

        let ident = Symbol::keyword_or_ident("myVar");
        assert_eq!(ident.as_str(), "myVar");
        assert!(!ident.is_known());
    }

    #[test]
    fn known_symbols_have_reserved_indices() {
        assert!(KW_FN.is_known());
        assert!(ID_PUTS.is_known());
        assert!(!Symbol::intern("not_a_keyword").is_known());
    }

    #[test]
    fn unicode_and_empty_strings_round_trip() {
        for s in ["", "你好", "🦀", "snake_case_1"] {
            let sym = Symbol::intern(s);
            assert_eq!(sym.as_str(), s);
        }
    }

    #[test]
    fn concurrent_intern_of_same_string_is_consistent() {
        let handles: Vec<_> = (0..10)
            .map(|_| thread::spawn(|| Symbol::intern("concurrent_same")))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for s in &results[1..] {
            assert_eq!(results[0], *s);
        }
    }

    #[quickcheck_macros::quickcheck]
    fn intern_round_trips_any_string(s: String) -> bool {
        Symbol::intern(&s).as_str() == s
    }

    #[quickcheck_macros::quickcheck]
    fn equal_strings_intern_to_equal_symbols(s: String) -> bool {
        Symbol::intern(&s) == Symbol::intern(&s)
    }
}
