//! colcrypt rule library entry.
//!
//! Loads encrypt rule files, resolves encryptor types through a
//! host-populated registry, and compiles them into the strategy engine held
//! by `EncryptRuntime`. Consumed by the `colcrypt-rule` lint binary and by
//! embedding middleware.

pub mod compile;
pub mod config;
pub mod registry;
pub mod report;
pub mod runtime;

pub use registry::{EncryptorFactory, EncryptorRegistry};
pub use runtime::EncryptRuntime;
