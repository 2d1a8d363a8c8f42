//! Encoding utilities: standard base64, compact base64 and hex.
//!
//! DH1080 tokens use a padding-free base64 variant so they survive
//! line-oriented chat protocols untouched:
//!
//! ```text
//! encode: base64(bytes), then
//!         if it contains '=' -> cut at the first '='
//!         else               -> append 'A'
//! decode: if len % 4 == 1 and ends with 'A' -> drop the 'A'
//!         pad with '=' to a multiple of 4, then base64-decode
//! ```
//!
//! ## Invariants
//! - Round-trip: `decode_compact(&encode_compact(x)) == x` for any input.
//! - Compact tokens never contain `=`.
//! - Decoding is lenient about non-zero trailing bits, matching the
//!   decoders deployed by other DH1080 clients.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::Engine as _;
use zeroize::Zeroizing;

use crate::constants::NO_PADDING_MARKER;
use crate::errors::Dh1080Error;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard padded base64 to bytes.
///
/// # Errors
/// Returns `Dh1080Error::Encoding` on invalid base64 input.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Dh1080Error> {
    LENIENT
        .decode(encoded)
        .map_err(|e| Dh1080Error::Encoding(format!("invalid base64: {e}")))
}

/// Encode bytes to a compact DH1080 token.
pub fn encode_compact(data: &[u8]) -> String {
    let mut encoded = to_base64(data);
    match encoded.find('=') {
        Some(pos) => encoded.truncate(pos),
        None => encoded.push(NO_PADDING_MARKER),
    }
    encoded
}

/// Decode a compact DH1080 token to bytes.
///
/// Callers handling untrusted tokens should run [`is_b64_charset`]
/// first; this function only reports a generic encoding failure.
///
/// # Errors
/// Returns `Dh1080Error::Encoding` if the re-padded token is not valid
/// base64 (for example a length of `4n + 1` without the trailing marker).
pub fn decode_compact(token: &str) -> Result<Vec<u8>, Dh1080Error> {
    let mut padded = Zeroizing::new(String::with_capacity(token.len() + 3));
    padded.push_str(token);

    if padded.len() % 4 == 1 && padded.ends_with(NO_PADDING_MARKER) {
        padded.pop();
    }
    while padded.len() % 4 != 0 {
        padded.push('=');
    }

    from_base64(&padded)
}

/// Returns `true` if every character of `token` is in the base64
/// alphabet `A-Z a-z 0-9 + /`. The empty string passes.
pub fn is_b64_charset(token: &str) -> bool {
    token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `Dh1080Error::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, Dh1080Error> {
    if encoded.len() % 2 != 0 {
        return Err(Dh1080Error::Encoding("odd-length hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            encoded
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| Dh1080Error::Encoding(format!("invalid hex at offset {i}")))
        })
        .collect()
}
