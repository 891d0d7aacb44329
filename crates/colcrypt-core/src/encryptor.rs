//! Encryptor capability abstraction.
//!
//! Cipher implementations live outside this crate. The strategy layer only
//! needs to know which variant an encryptor is, so the set of variants is a
//! closed enum instead of something discovered by downcasting.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;

/// Encryptor properties handed to factories (key references, salts, ...).
pub type Props = BTreeMap<String, String>;

/// Plain column encryptor.
pub trait Encryptor: Send + Sync {
    /// Configured type name (e.g. "aes").
    fn encryptor_type(&self) -> &str;
    fn encrypt(&self, plaintext: &str) -> Result<String>;
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}

/// Encryptor that also derives a deterministic value for the assisted-query
/// column, so equality predicates can be evaluated without decrypting rows.
pub trait QueryAssistedEncryptor: Encryptor {
    fn query_assisted_encrypt(&self, plaintext: &str) -> Result<String>;
}

/// Variant tag of an encryptor capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptorKind {
    Plain,
    QueryAssisted,
}

/// Shared handle to an encryptor, tagged by capability.
#[derive(Clone)]
pub enum EncryptorCapability {
    Plain(Arc<dyn Encryptor>),
    QueryAssisted(Arc<dyn QueryAssistedEncryptor>),
}

impl EncryptorCapability {
    pub fn plain(encryptor: impl Encryptor + 'static) -> Self {
        Self::Plain(Arc::new(encryptor))
    }

    pub fn query_assisted(encryptor: impl QueryAssistedEncryptor + 'static) -> Self {
        Self::QueryAssisted(Arc::new(encryptor))
    }

    pub fn kind(&self) -> EncryptorKind {
        match self {
            Self::Plain(_) => EncryptorKind::Plain,
            Self::QueryAssisted(_) => EncryptorKind::QueryAssisted,
        }
    }

    pub fn is_query_assisted(&self) -> bool {
        matches!(self, Self::QueryAssisted(_))
    }

    pub fn encryptor_type(&self) -> &str {
        match self {
            Self::Plain(e) => e.encryptor_type(),
            Self::QueryAssisted(e) => e.encryptor_type(),
        }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        match self {
            Self::Plain(e) => e.encrypt(plaintext),
            Self::QueryAssisted(e) => e.encrypt(plaintext),
        }
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        match self {
            Self::Plain(e) => e.decrypt(ciphertext),
            Self::QueryAssisted(e) => e.decrypt(ciphertext),
        }
    }

    /// Query-assisted view, if this is that variant.
    pub fn as_query_assisted(&self) -> Option<&dyn QueryAssistedEncryptor> {
        match self {
            Self::Plain(_) => None,
            Self::QueryAssisted(e) => Some(e.as_ref()),
        }
    }

    /// True when both handles point at the same encryptor instance.
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::QueryAssisted(a), Self::QueryAssisted(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for EncryptorCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptorCapability")
            .field("kind", &self.kind())
            .field("type", &self.encryptor_type())
            .finish()
    }
}
