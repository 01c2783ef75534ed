//! Concurrent string interner backed by `DashMap`, used for `Symbol`.
//!
//! Interning (hit) is O(1) hash lookup; interning (miss) is O(1) hash
//! insert plus one allocation. String retrieval is O(n) in the number of
//! interned strings — rare outside error messages and `inspect` output.

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::LazyLock;

use super::{InternerStats, Symbol};

/// Global string table, initialized on first use. All keywords and built-in
/// names are pre-interned so they get stable, predictable indices.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

pub struct StringTable {
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicU32,
    collisions: AtomicUsize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

const RESERVED_SYMBOLS_END: u32 = 64;

impl StringTable {
    #[inline]
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(256),
            next_index: AtomicU32::new(RESERVED_SYMBOLS_END),
            collisions: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Must stay in the same order as the `KW_*`/`ID_*` constants in
    /// `symbol::mod`, since index assignment here is positional.
    fn initialize_known_symbols(&self) {
        let known_symbols = [
            "fn", "let", "true", "false", "if", "else", "return", "len", "first", "last", "rest",
            "push", "puts",
        ];

        for (idx, symbol) in known_symbols.iter().enumerate() {
            let actual_idx = idx as u32;
            if actual_idx < RESERVED_SYMBOLS_END {
                let interned: &'static str = Box::leak(symbol.to_string().into_boxed_str());
                let hash = Self::hash_string(symbol);
                self.map.insert(hash, (interned, actual_idx));
            }
        }
    }

    pub fn intern(&self, string: &str) -> Symbol {
        let hash = Self::hash_string(string);

        if let Some(entry) = self.map.get(&hash) {
            if entry.value().0 == string {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Symbol {
                    index: entry.value().1,
                };
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);

        match self.map.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                if entry.get().0 == string {
                    Symbol { index: entry.get().1 }
                } else {
                    self.handle_collision(string, hash)
                }
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                entry.insert((interned, idx));
                Symbol { index: idx }
            }
        }
    }

    /// Linear probing with a golden-ratio offset on hash collision — rare in
    /// practice for a single interpreter session's identifier set.
    fn handle_collision(&self, string: &str, original_hash: u64) -> Symbol {
        const MAX_PROBES: u64 = 32;
        const PROBE_PRIME: u64 = 0x9e3779b97f4a7c15;

        for i in 1u64..=MAX_PROBES {
            let probe_hash = original_hash.wrapping_add(i.wrapping_mul(PROBE_PRIME));

            if let Some(entry) = self.map.get(&probe_hash) {
                if entry.value().0 == string {
                    return Symbol {
                        index: entry.value().1,
                    };
                }
            } else {
                self.collisions.fetch_add(1, Ordering::Relaxed);
                let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                self.map.insert(probe_hash, (interned, idx));
                return Symbol { index: idx };
            }
        }

        self.collisions.fetch_add(1, Ordering::Relaxed);
        let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
        let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
        self.map.insert(original_hash, (interned, idx));
        Symbol { index: idx }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.map
            .iter()
            .find(|entry| entry.value().1 == symbol.index)
            .map(|entry| entry.value().0)
    }

    #[inline]
    fn hash_string(string: &str) -> u64 {
        let mut hasher = AHasher::default();
        string.hash(&mut hasher);
        hasher.finish()
    }

    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.map.len(),
            capacity: self.map.capacity(),
            collisions: self.collisions.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    #[cfg(test)]
    pub(crate) fn reset_stats(&self) {
        self.collisions.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn intern_same_and_different_strings() {
        let s1 = STRING_TABLE.intern("hello");
        let s2 = STRING_TABLE.intern("hello");
        let s3 = STRING_TABLE.intern("world");
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
    }

    #[test]
    fn get_returns_original_string() {
        let symbol = STRING_TABLE.intern("test_string");
        assert_eq!(STRING_TABLE.get(symbol), Some("test_string"));
    }

    #[test]
    fn concurrent_intern_is_thread_safe() {
        let handles: Vec<_> = (0..20)
            .map(|i| thread::spawn(move || STRING_TABLE.intern(&format!("thread_{i}"))))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                assert_ne!(results[i], results[j]);
            }
        }
    }

    #[test]
    fn stats_track_hits_and_misses() {
        STRING_TABLE.reset_stats();
        let _ = STRING_TABLE.intern("new_unique_string_12345");
        assert!(STRING_TABLE.stats().misses >= 1);
        let _ = STRING_TABLE.intern("new_unique_string_12345");
        assert!(STRING_TABLE.stats().hits >= 1);
    }
}
