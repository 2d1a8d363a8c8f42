//! Error types for dh1080-core.
//!
//! One enum covers every failure the core can report. The calling
//! protocol layer decides presentation; this crate only supplies the
//! reason. Each variant also carries a stable upper-snake code (see
//! [`ERROR_CODES`]) for diagnostics that must not depend on Display text.

/// Unified error type for all dh1080-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Dh1080Error {
    /// Domain parameter construction failed.
    #[error("Init error: {0}")]
    Init(String),

    /// An operation ran before `initialize` or after `shutdown`.
    #[error("DH1080 is not initialized")]
    Uninitialized,

    /// `initialize` called twice without `shutdown` in between.
    #[error("DH1080 is already initialized")]
    AlreadyInitialized,

    /// A token contains characters outside the base64 alphabet.
    #[error("Invalid charset in key token")]
    InvalidCharset,

    /// A token passed the charset check but does not decode.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Peer public value outside `1 < y < p - 1`.
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Key pair generation failed.
    #[error("Keygen error: {0}")]
    Keygen(String),

    /// Shared secret derivation failed.
    #[error("Derive error: {0}")]
    Derive(String),
}

impl Dh1080Error {
    /// Stable code for this error, one of [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::Init(_) => "INIT_FAILED",
            Self::Uninitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::InvalidCharset => "INVALID_CHARSET",
            Self::Encoding(_) => "ENCODING_FAILED",
            Self::InvalidPublicKey => "INVALID_PUBLIC_KEY",
            Self::Keygen(_) => "KEYGEN_FAILED",
            Self::Derive(_) => "DERIVE_FAILED",
        }
    }
}

/// Canonical error code registry: one code per [`Dh1080Error`] variant.
pub const ERROR_CODES: [&str; 8] = [
    "INIT_FAILED",
    "NOT_INITIALIZED",
    "ALREADY_INITIALIZED",
    "INVALID_CHARSET",
    "ENCODING_FAILED",
    "INVALID_PUBLIC_KEY",
    "KEYGEN_FAILED",
    "DERIVE_FAILED",
];

/// Returns `true` if the given string is a canonical error code.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
