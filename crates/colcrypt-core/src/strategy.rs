//! Per-table encryption strategy.

use std::collections::{HashMap, HashSet};

use crate::encryptor::EncryptorCapability;

/// Binds one logical table to its encryptor, the plaintext columns it
/// protects and, for query-assisted encryptors, the assisted-query column of
/// each protected column.
///
/// Column counts are not validated here; the rule loader rejects
/// inconsistent configurations before a strategy is built.
#[derive(Debug, Clone)]
pub struct EncryptorStrategy {
    encryptor: EncryptorCapability,
    columns: Vec<String>,
    column_set: HashSet<String>,
    assisted_query_columns: Vec<String>,
    assisted_by_column: HashMap<String, String>,
}

impl EncryptorStrategy {
    /// `assisted_query_columns[i]` pairs with `columns[i]` as configured.
    /// The pairing is only kept for query-assisted encryptors.
    pub fn new<C, A>(encryptor: EncryptorCapability, columns: C, assisted_query_columns: A) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let raw: Vec<String> = columns.into_iter().map(Into::into).collect();
        let assisted_query_columns: Vec<String> =
            assisted_query_columns.into_iter().map(Into::into).collect();

        // pairing follows configured positions; a repeated column keeps its first pair
        let mut assisted_by_column = HashMap::new();
        if encryptor.is_query_assisted() {
            for (c, a) in raw.iter().zip(&assisted_query_columns) {
                assisted_by_column
                    .entry(c.clone())
                    .or_insert_with(|| a.clone());
            }
        }

        let mut ordered = Vec::new();
        let mut column_set = HashSet::new();
        for c in raw {
            if column_set.insert(c.clone()) {
                ordered.push(c);
            }
        }

        Self {
            encryptor,
            columns: ordered,
            column_set,
            assisted_query_columns,
            assisted_by_column,
        }
    }

    pub fn encryptor(&self) -> &EncryptorCapability {
        &self.encryptor
    }

    /// Protected plaintext columns, in configured order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.column_set.contains(column)
    }

    pub fn assisted_query_columns(&self) -> &[String] {
        &self.assisted_query_columns
    }

    /// Assisted-query column for `column`; `None` for plain encryptors or
    /// columns without one.
    pub fn assisted_query_column(&self, column: &str) -> Option<&str> {
        self.assisted_by_column.get(column).map(String::as_str)
    }

    pub fn assisted_query_column_count(&self) -> usize {
        self.assisted_query_columns.len()
    }
}
