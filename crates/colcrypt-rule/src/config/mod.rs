//! Encrypt rule loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use colcrypt_core::error::{ColCryptError, Result};

pub use schema::{EncryptRuleConfig, EncryptorConfig, TableRuleConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<EncryptRuleConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        ColCryptError::Internal(format!("read rule file {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<EncryptRuleConfig> {
    let cfg: EncryptRuleConfig = serde_yaml::from_str(s)
        .map_err(|e| ColCryptError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
