//! Hashing utilities: SHA-256 and the secret-token step.
//!
//! The raw DH shared value is never handed out. It is hashed with
//! SHA-256 and the digest is compact-encoded; that token is the key
//! material given to the symmetric cipher layer.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::constants::SHA256_DIGEST_LENGTH;
use crate::encoding;

/// Compute SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; SHA256_DIGEST_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash a shared value and compact-encode the digest.
///
/// Deterministic: the same shared bytes always give the same token.
/// The intermediate digest is wiped before returning.
pub fn secret_token(shared: &[u8]) -> String {
    let digest = Zeroizing::new(sha256(shared));
    encoding::encode_compact(&digest[..])
}
