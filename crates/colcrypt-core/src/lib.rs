//! colcrypt core: column-encryption strategy resolution.
//!
//! This crate answers the questions the SQL rewriting and result decoding
//! stages ask before touching row data: is this column encrypted, by which
//! encryptor, and does the table carry assisted-query columns. It holds no
//! config parsing or I/O so it can be embedded in any host.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Lookups are total: an absent result means "not applicable", never a failure.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod encryptor;
pub mod engine;
pub mod error;
pub mod strategy;

pub use encryptor::{Encryptor, EncryptorCapability, EncryptorKind, Props, QueryAssistedEncryptor};
pub use engine::EncryptionStrategyEngine;
/// Shared result type.
pub use error::{ColCryptError, Result};
pub use strategy::EncryptorStrategy;
