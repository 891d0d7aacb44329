//! Shared encrypt runtime.
//!
//! Owns the current strategy engine and the registry used to rebuild it.
//! Construct once at startup and hand clones to the rewriting and decoding
//! layers. A reload compiles a whole new engine and swaps the reference;
//! snapshots already taken by in-flight statements keep the old one alive.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use colcrypt_core::error::{ColCryptError, Result};
use colcrypt_core::EncryptionStrategyEngine;

use crate::compile::compile_engine;
use crate::config::{self, EncryptRuleConfig};
use crate::registry::EncryptorRegistry;
use crate::report::EngineReport;

#[derive(Clone)]
pub struct EncryptRuntime {
    inner: Arc<RuntimeInner>,
}

struct RuntimeInner {
    registry: Arc<EncryptorRegistry>,
    engine: RwLock<Arc<EncryptionStrategyEngine>>,
    generation: AtomicU64,
}

impl EncryptRuntime {
    pub fn new(rule: &EncryptRuleConfig, registry: Arc<EncryptorRegistry>) -> Result<Self> {
        let engine = compile_engine(rule, &registry)?;
        tracing::info!(tables = engine.len(), "encrypt runtime built");

        Ok(Self {
            inner: Arc::new(RuntimeInner {
                registry,
                engine: RwLock::new(Arc::new(engine)),
                generation: AtomicU64::new(1),
            }),
        })
    }

    pub fn from_file(path: impl AsRef<Path>, registry: Arc<EncryptorRegistry>) -> Result<Self> {
        let rule = config::load_from_file(path)?;
        Self::new(&rule, registry)
    }

    /// Current engine. Hold the snapshot for the whole statement so every
    /// lookup sees the same rules.
    pub fn engine(&self) -> Result<Arc<EncryptionStrategyEngine>> {
        let g = self
            .inner
            .engine
            .read()
            .map_err(|_| ColCryptError::Internal("engine lock poisoned".into()))?;
        Ok(Arc::clone(&*g))
    }

    /// Replace the engine with one compiled from `rule`.
    /// On error the current engine stays in place.
    pub fn reload(&self, rule: &EncryptRuleConfig) -> Result<()> {
        let engine = match compile_engine(rule, &self.inner.registry) {
            Ok(e) => Arc::new(e),
            Err(e) => {
                tracing::warn!(error = %e, "encrypt rule reload rejected; keeping current engine");
                return Err(e);
            }
        };

        let tables = engine.len();
        let generation = {
            let mut g = self
                .inner
                .engine
                .write()
                .map_err(|_| ColCryptError::Internal("engine lock poisoned".into()))?;
            *g = engine;
            self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1
        };
        tracing::info!(tables, generation, "encrypt rules reloaded");
        Ok(())
    }

    pub fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let rule = match config::load_from_file(path) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "encrypt rule file rejected; keeping current engine");
                return Err(e);
            }
        };
        self.reload(&rule)
    }

    /// Summary of the current engine.
    pub fn report(&self) -> Result<EngineReport> {
        Ok(EngineReport::from_engine(&*self.engine()?))
    }

    /// Starts at 1, +1 per successful reload.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    pub fn registry(&self) -> &EncryptorRegistry {
        &self.inner.registry
    }
}
