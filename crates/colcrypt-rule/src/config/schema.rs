use std::collections::HashSet;

use serde::Deserialize;

use colcrypt_core::error::{ColCryptError, Result};
use colcrypt_core::Props;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptRuleConfig {
    pub version: u32,

    /// Applied to listed tables that configure no encryptor of their own.
    #[serde(default)]
    pub default_encryptor: Option<EncryptorConfig>,

    #[serde(default)]
    pub tables: Vec<TableRuleConfig>,
}

impl EncryptRuleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ColCryptError::UnsupportedVersion(self.version));
        }

        if let Some(d) = &self.default_encryptor {
            d.validate("default_encryptor")?;
        }

        let mut seen = HashSet::new();
        for t in &self.tables {
            if t.name.trim().is_empty() {
                return Err(ColCryptError::BadConfig("tables[].name must not be empty".into()));
            }
            if !seen.insert(t.name.as_str()) {
                return Err(ColCryptError::BadConfig(format!(
                    "duplicate table rule: {}",
                    t.name
                )));
            }
            if let Some(e) = &t.encryptor {
                e.validate(&t.name)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableRuleConfig {
    pub name: String,
    /// None => default encryptor if configured, otherwise unencrypted.
    #[serde(default)]
    pub encryptor: Option<EncryptorConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptorConfig {
    #[serde(rename = "type")]
    pub encryptor_type: String,

    pub columns: Vec<String>,

    /// Paired with `columns` by position.
    #[serde(default)]
    pub assisted_query_columns: Vec<String>,

    #[serde(default)]
    pub props: Props,
}

impl EncryptorConfig {
    /// `owner` names the table (or `default_encryptor`) in error messages.
    pub fn validate(&self, owner: &str) -> Result<()> {
        if self.encryptor_type.trim().is_empty() {
            return Err(ColCryptError::BadConfig(format!(
                "{owner}: encryptor type must not be empty"
            )));
        }
        if self.columns.is_empty() {
            return Err(ColCryptError::BadConfig(format!(
                "{owner}: columns must not be empty"
            )));
        }
        if self
            .columns
            .iter()
            .chain(&self.assisted_query_columns)
            .any(|c| c.trim().is_empty())
        {
            return Err(ColCryptError::BadConfig(format!(
                "{owner}: column names must not be blank"
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.columns.iter().find(|&c| !seen.insert(c.as_str())) {
            return Err(ColCryptError::BadConfig(format!(
                "{owner}: duplicate column: {dup}"
            )));
        }
        if !self.assisted_query_columns.is_empty()
            && self.assisted_query_columns.len() != self.columns.len()
        {
            return Err(ColCryptError::BadConfig(format!(
                "{owner}: assisted_query_columns ({}) must match columns ({})",
                self.assisted_query_columns.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }
}
