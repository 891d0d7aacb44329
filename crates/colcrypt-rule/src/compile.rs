//! Rule compilation: config + registry -> strategy engine.

use std::sync::Arc;

use colcrypt_core::error::Result;
use colcrypt_core::{EncryptionStrategyEngine, EncryptorStrategy};

use crate::config::{EncryptRuleConfig, EncryptorConfig};
use crate::registry::EncryptorRegistry;

/// Instantiate the encryptor for `cfg` and bind it to its columns.
pub fn compile_strategy(
    cfg: &EncryptorConfig,
    registry: &EncryptorRegistry,
) -> Result<Arc<EncryptorStrategy>> {
    let encryptor = registry.create(&cfg.encryptor_type, &cfg.props)?;
    Ok(Arc::new(EncryptorStrategy::new(
        encryptor,
        cfg.columns.iter().cloned(),
        cfg.assisted_query_columns.iter().cloned(),
    )))
}

/// Validates `rule` first; callers may build the config without the loader.
pub fn compile_engine(
    rule: &EncryptRuleConfig,
    registry: &EncryptorRegistry,
) -> Result<EncryptionStrategyEngine> {
    rule.validate()?;

    let mut entries = Vec::with_capacity(rule.tables.len());
    for t in &rule.tables {
        let strategy = match &t.encryptor {
            Some(cfg) => {
                let s = compile_strategy(cfg, registry)?;
                warn_on_mismatch(&t.name, &s);
                Some(s)
            }
            None => None,
        };
        entries.push((t.name.clone(), strategy));
    }

    match &rule.default_encryptor {
        Some(cfg) => {
            let default = compile_strategy(cfg, registry)?;
            warn_on_mismatch("default_encryptor", &default);
            Ok(EncryptionStrategyEngine::with_default(entries, default))
        }
        None => Ok(EncryptionStrategyEngine::new(entries)),
    }
}

fn warn_on_mismatch(owner: &str, s: &EncryptorStrategy) {
    let assisted = s.encryptor().is_query_assisted();
    let configured = s.assisted_query_column_count() > 0;
    if assisted && !configured {
        tracing::warn!(
            table = %owner,
            encryptor = %s.encryptor().encryptor_type(),
            "query-assisted encryptor has no assisted_query_columns"
        );
    } else if !assisted && configured {
        tracing::warn!(
            table = %owner,
            encryptor = %s.encryptor().encryptor_type(),
            "assisted_query_columns configured for a plain encryptor; they will not be resolved"
        );
    }
}
