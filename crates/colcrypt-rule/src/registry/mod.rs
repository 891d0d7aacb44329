//! Encryptor registry exports.
//!
//! Ciphers are plugged in by the host through `EncryptorFactory`; the rule
//! compiler resolves configured encryptor types through the registry.

pub mod factory;

pub use factory::{EncryptorFactory, EncryptorRegistry};
