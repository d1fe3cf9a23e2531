//! Per-search transposition table.
//!
//! Maps Zobrist hashes to tree-node indices. The table is an observability
//! aid: entries are written when nodes are created and the search reads only
//! the entry count. Hash collisions are therefore harmless, and the fifty-
//! move clock is deliberately not part of the key.

use std::collections::HashMap;

#[derive(Default)]
pub(crate) struct TranspositionTable {
    table: HashMap<u64, usize>,
}

impl TranspositionTable {
    pub(crate) fn new() -> Self {
        TranspositionTable {
            table: HashMap::new(),
        }
    }

    /// Associate a position hash with a tree-node index, overwriting any
    /// previous entry.
    pub(crate) fn store(&mut self, hash: u64, node: usize) {
        self.table.insert(hash, node);
    }

    /// Number of distinct positions seen this search.
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Drop all entries; called at the start of every search.
    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }
}
