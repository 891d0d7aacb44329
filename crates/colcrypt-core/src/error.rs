//! Shared error type across colcrypt crates.

use thiserror::Error;

/// Stable error codes (reported by tooling and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or inconsistent rule configuration.
    BadConfig,
    /// Unsupported rule file version.
    UnsupportedVersion,
    /// Encryptor type has no registered factory.
    UnknownEncryptor,
    /// Encryptor implementation failed.
    Encryptor,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::UnknownEncryptor => "UNKNOWN_ENCRYPTOR",
            ErrorCode::Encryptor => "ENCRYPTOR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ColCryptError>;

/// Unified error type used by core and rule crates.
#[derive(Debug, Error)]
pub enum ColCryptError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported rule version: {0}")]
    UnsupportedVersion(u32),
    #[error("unknown encryptor type: {0}")]
    UnknownEncryptorType(String),
    #[error("encryptor: {0}")]
    Encryptor(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ColCryptError {
    /// Map error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ColCryptError::BadConfig(_) => ErrorCode::BadConfig,
            ColCryptError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            ColCryptError::UnknownEncryptorType(_) => ErrorCode::UnknownEncryptor,
            ColCryptError::Encryptor(_) => ErrorCode::Encryptor,
            ColCryptError::Internal(_) => ErrorCode::Internal,
        }
    }
}
