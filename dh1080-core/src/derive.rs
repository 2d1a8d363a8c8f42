//! Shared secret derivation.
//!
//! ```text
//! charset check (both tokens)
//!   -> decode both tokens, parse big-endian
//!   -> validate peer public value      (1 < y < p - 1)
//!   -> rebuild our key pair from x      (g^x mod p, validated)
//!   -> shared = y^x mod p               (minimal big-endian bytes)
//!   -> compact_b64(SHA-256(shared))
//! ```
//!
//! Buffers holding raw private-exponent bytes or shared-value bytes are
//! `Zeroizing`, so they are wiped on every return path, early errors
//! included. The `BigUint` working copies of the private exponent and
//! the shared value are not: num-bigint has no zeroize support, so their
//! limbs are freed without being cleared.
//!
//! Symmetry: `derive_secret(x_a, y_b) == derive_secret(x_b, y_a)`, both
//! being `g^(x_a * x_b) mod p` hashed.

use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::encoding::{decode_compact, is_b64_charset};
use crate::errors::Dh1080Error;
use crate::hash::secret_token;
use crate::keygen::KeyPair;
use crate::params::DomainParameters;
use crate::validate::is_valid_public_key;

/// Derive the secret token from our private token and the peer's public
/// token.
///
/// # Errors
/// - `Dh1080Error::InvalidCharset` if either token has non-base64
///   characters. Nothing is decoded in that case.
/// - `Dh1080Error::Encoding` if a token does not decode.
/// - `Dh1080Error::InvalidPublicKey` if the peer value is out of range.
/// - `Dh1080Error::Derive` if our private exponent is unusable or the
///   shared value is degenerate.
pub fn derive_secret(
    params: &DomainParameters,
    private_token: &str,
    peer_public_token: &str,
) -> Result<String, Dh1080Error> {
    if !is_b64_charset(private_token) || !is_b64_charset(peer_public_token) {
        warn!("dh1080 key token rejected: invalid charset");
        return Err(Dh1080Error::InvalidCharset);
    }

    let peer_public = BigUint::from_bytes_be(&decode_compact(peer_public_token)?);
    let private_bytes = Zeroizing::new(decode_compact(private_token)?);
    let private_exponent = BigUint::from_bytes_be(&private_bytes);

    if !is_valid_public_key(params, &peer_public) {
        warn!(
            peer_bits = peer_public.bits(),
            "dh1080 peer public key rejected: out of range"
        );
        return Err(Dh1080Error::InvalidPublicKey);
    }

    let ours = KeyPair::from_private_exponent(params, &private_exponent)
        .map_err(|e| Dh1080Error::Derive(e.to_string()))?;

    let shared = compute_shared(params, &ours, &peer_public)?;
    let token = secret_token(&shared);

    debug!(shared_len = shared.len(), "dh1080 secret derived");
    Ok(token)
}

/// `peer_public ^ x mod p` as minimal big-endian bytes.
///
/// # Errors
/// Returns `Dh1080Error::Derive` if the result is `0`, `1` or `p - 1`.
pub fn compute_shared(
    params: &DomainParameters,
    ours: &KeyPair,
    peer_public: &BigUint,
) -> Result<Zeroizing<Vec<u8>>, Dh1080Error> {
    let shared = peer_public.modpow(&ours.private_exponent(), params.modulus());
    if shared <= BigUint::one() || &shared == params.modulus_minus_one() {
        return Err(Dh1080Error::Derive("degenerate shared value".into()));
    }
    Ok(Zeroizing::new(shared.to_bytes_be()))
}
