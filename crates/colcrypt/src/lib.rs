//! Top-level facade crate for colcrypt.
//!
//! Re-exports the core strategy types and the rule runtime so users can depend on a single crate.

pub mod core {
    pub use colcrypt_core::*;
}

pub mod rule {
    pub use colcrypt_rule::*;
}
