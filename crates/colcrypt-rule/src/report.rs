//! Rule summaries: `RuleReport` from a rule file (lint binary, no
//! encryptors needed) and `EngineReport` from a compiled engine.

use serde::Serialize;

use colcrypt_core::{EncryptionStrategyEngine, EncryptorKind};

use crate::config::{EncryptRuleConfig, EncryptorConfig};

#[derive(Debug, Serialize)]
pub struct RuleReport {
    pub version: u32,
    pub default_encryptor: Option<EncryptorSummary>,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub name: String,
    /// "explicit", "default" or "none" (unencrypted).
    pub source: &'static str,
    pub encryptor: Option<EncryptorSummary>,
}

#[derive(Debug, Serialize)]
pub struct EncryptorSummary {
    #[serde(rename = "type")]
    pub encryptor_type: String,
    pub columns: Vec<ColumnSummary>,
    pub assisted_query_column_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub assisted_query_column: Option<String>,
}

impl RuleReport {
    /// Summarise a validated rule without instantiating any encryptor.
    pub fn from_rule(rule: &EncryptRuleConfig) -> Self {
        let default_encryptor = rule.default_encryptor.as_ref().map(EncryptorSummary::from_config);
        let tables = rule
            .tables
            .iter()
            .map(|t| match (&t.encryptor, &rule.default_encryptor) {
                (Some(e), _) => TableSummary {
                    name: t.name.clone(),
                    source: "explicit",
                    encryptor: Some(EncryptorSummary::from_config(e)),
                },
                (None, Some(d)) => TableSummary {
                    name: t.name.clone(),
                    source: "default",
                    encryptor: Some(EncryptorSummary::from_config(d)),
                },
                (None, None) => TableSummary {
                    name: t.name.clone(),
                    source: "none",
                    encryptor: None,
                },
            })
            .collect();

        Self {
            version: rule.version,
            default_encryptor,
            tables,
        }
    }
}

impl EncryptorSummary {
    fn from_config(cfg: &EncryptorConfig) -> Self {
        let columns = cfg
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| ColumnSummary {
                column: c.clone(),
                assisted_query_column: cfg.assisted_query_columns.get(i).cloned(),
            })
            .collect();
        Self {
            encryptor_type: cfg.encryptor_type.clone(),
            columns,
            assisted_query_column_count: cfg.assisted_query_columns.len(),
        }
    }
}

/// What the compiled engine will answer, table by table.
#[derive(Debug, Serialize)]
pub struct EngineReport {
    pub tables: Vec<EngineTableSummary>,
}

#[derive(Debug, Serialize)]
pub struct EngineTableSummary {
    pub name: String,
    pub kind: EncryptorKind,
    #[serde(rename = "type")]
    pub encryptor_type: String,
    pub supports_assisted_query: bool,
    pub columns: Vec<ColumnSummary>,
    pub assisted_query_column_count: usize,
}

impl EngineReport {
    pub fn from_engine(engine: &EncryptionStrategyEngine) -> Self {
        let tables = engine
            .tables()
            .filter_map(|t| engine.strategy(t).map(|s| (t, s)))
            .map(|(t, s)| EngineTableSummary {
                name: t.to_string(),
                kind: s.encryptor().kind(),
                encryptor_type: s.encryptor().encryptor_type().to_string(),
                supports_assisted_query: engine.supports_assisted_query(t),
                columns: s
                    .columns()
                    .iter()
                    .map(|c| ColumnSummary {
                        column: c.clone(),
                        assisted_query_column: engine
                            .assisted_query_column(t, c)
                            .map(str::to_string),
                    })
                    .collect(),
                assisted_query_column_count: s.assisted_query_column_count(),
            })
            .collect();
        Self { tables }
    }
}
