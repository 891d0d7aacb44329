use std::sync::Arc;

use dashmap::DashMap;

use colcrypt_core::error::{ColCryptError, Result};
use colcrypt_core::{EncryptorCapability, Props};

/// Builds encryptor instances of one type from configured props.
pub trait EncryptorFactory: Send + Sync {
    /// Type name matched against `type:` in rule files (case-insensitive).
    fn encryptor_type(&self) -> &'static str;
    fn create(&self, props: &Props) -> Result<EncryptorCapability>;
}

/// Registry of encryptor factories keyed by lower-cased type name.
#[derive(Default)]
pub struct EncryptorRegistry {
    factories: DashMap<String, Arc<dyn EncryptorFactory>>,
}

impl EncryptorRegistry {
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Register a factory. A later registration of the same type replaces it.
    pub fn register(&self, factory: Arc<dyn EncryptorFactory>) {
        let ty = factory.encryptor_type().to_ascii_lowercase();
        if self.factories.insert(ty.clone(), factory).is_some() {
            tracing::warn!(encryptor_type = %ty, "encryptor factory replaced");
        }
    }

    pub fn registered_types(&self) -> Vec<String> {
        let mut out: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        out.sort();
        out
    }

    pub fn create(&self, encryptor_type: &str, props: &Props) -> Result<EncryptorCapability> {
        let factory = self
            .factories
            .get(&encryptor_type.to_ascii_lowercase())
            .ok_or_else(|| ColCryptError::UnknownEncryptorType(encryptor_type.to_string()))?
            .value()
            .clone();
        factory.create(props)
    }
}
