//! Public key validation.
//!
//! A peer-supplied public value `y` is accepted only when
//! `1 < y < p - 1`. The excluded values (`0`, `1`, `p - 1` and anything
//! at or above it) would pin the shared secret to a trivially
//! predictable value or a subgroup of order at most two.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::encoding::{decode_compact, is_b64_charset};
use crate::errors::Dh1080Error;
use crate::params::DomainParameters;

/// Returns `true` if `value` is an acceptable public value in `params`.
pub fn is_valid_public_key(params: &DomainParameters, value: &BigUint) -> bool {
    if value.is_zero() || value.is_one() {
        return false;
    }
    value < params.modulus_minus_one()
}

/// Signed variant of [`is_valid_public_key`]. Negative values are rejected.
pub fn is_valid_signed_public_key(params: &DomainParameters, value: &BigInt) -> bool {
    match value.to_biguint() {
        Some(unsigned) => is_valid_public_key(params, &unsigned),
        None => false,
    }
}

/// Vet a peer's public key token: charset, decoding and range.
///
/// # Errors
/// - `Dh1080Error::InvalidCharset` if the token has non-base64 characters.
/// - `Dh1080Error::Encoding` if it does not decode.
/// - `Dh1080Error::InvalidPublicKey` if the value is out of range.
pub fn decode_public_key(params: &DomainParameters, token: &str) -> Result<BigUint, Dh1080Error> {
    if !is_b64_charset(token) {
        return Err(Dh1080Error::InvalidCharset);
    }
    let value = BigUint::from_bytes_be(&decode_compact(token)?);
    if !is_valid_public_key(params, &value) {
        return Err(Dh1080Error::InvalidPublicKey);
    }
    Ok(value)
}
