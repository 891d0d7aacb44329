//! Encryption strategy engine.
//!
//! Immutable registry from logical table name to its strategy.
//! Construct once from configuration, then share via `Arc` across every
//! thread that rewrites statements. No write path exists after construction,
//! so reads need no locking; a reload builds a new engine instead.

use std::collections::HashMap;
use std::sync::Arc;

use crate::encryptor::EncryptorCapability;
use crate::strategy::EncryptorStrategy;

#[derive(Debug, Default)]
pub struct EncryptionStrategyEngine {
    // insertion order kept for introspection only; lookups go through `index`
    entries: Vec<(String, Arc<EncryptorStrategy>)>,
    index: HashMap<String, usize>,
}

impl EncryptionStrategyEngine {
    /// Build without a default: tables whose strategy is `None` are dropped
    /// and behave as unencrypted.
    pub fn new<I>(strategies: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<Arc<EncryptorStrategy>>)>,
    {
        Self::build(strategies, None)
    }

    /// Build with a default: tables whose strategy is `None` get `default`.
    pub fn with_default<I>(strategies: I, default: Arc<EncryptorStrategy>) -> Self
    where
        I: IntoIterator<Item = (String, Option<Arc<EncryptorStrategy>>)>,
    {
        Self::build(strategies, Some(default))
    }

    fn build<I>(strategies: I, default: Option<Arc<EncryptorStrategy>>) -> Self
    where
        I: IntoIterator<Item = (String, Option<Arc<EncryptorStrategy>>)>,
    {
        let mut engine = Self::default();
        let mut dropped = 0usize;
        for (table, strategy) in strategies {
            match strategy.or_else(|| default.clone()) {
                Some(s) => engine.insert(table, s),
                None => dropped += 1,
            }
        }
        tracing::debug!(
            tables = engine.entries.len(),
            dropped,
            with_default = default.is_some(),
            "encryption strategy engine built"
        );
        engine
    }

    // duplicate names: last strategy wins, first position is kept
    fn insert(&mut self, table: String, strategy: Arc<EncryptorStrategy>) {
        match self.index.get(&table) {
            Some(&i) => self.entries[i].1 = strategy,
            None => {
                self.index.insert(table.clone(), self.entries.len());
                self.entries.push((table, strategy));
            }
        }
    }

    /// Strategy registered for `table`.
    pub fn strategy(&self, table: &str) -> Option<&Arc<EncryptorStrategy>> {
        self.index.get(table).map(|&i| &self.entries[i].1)
    }

    /// Encryptor protecting `table.column`, if that column is encrypted.
    pub fn lookup_encryptor(&self, table: &str, column: &str) -> Option<&EncryptorCapability> {
        self.strategy(table)
            .filter(|s| s.contains_column(column))
            .map(|s| s.encryptor())
    }

    /// Whether the table's encryptor is query-assisted. Says nothing about
    /// whether any single column has an assisted-query column mapped.
    pub fn supports_assisted_query(&self, table: &str) -> bool {
        self.strategy(table)
            .is_some_and(|s| s.encryptor().is_query_assisted())
    }

    /// Assisted-query column of `column`.
    ///
    /// Does not check that `column` is one of the table's protected columns;
    /// callers resolve that through [`Self::lookup_encryptor`] first.
    pub fn assisted_query_column(&self, table: &str, column: &str) -> Option<&str> {
        self.strategy(table)?.assisted_query_column(column)
    }

    /// Number of assisted-query columns configured for `table`
    /// (zero is a valid answer for a registered table).
    pub fn assisted_query_column_count(&self, table: &str) -> Option<usize> {
        self.strategy(table).map(|s| s.assisted_query_column_count())
    }

    pub fn contains_table(&self, table: &str) -> bool {
        self.index.contains_key(table)
    }

    /// Registered table names in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
