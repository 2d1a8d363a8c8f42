//! Protocol constants: canonical DH1080 group and wire values.
//!
//! Every participant MUST use the same prime and generator, otherwise
//! the two sides of an exchange land in different groups and derive
//! unrelated secrets. The prime is a 1080-bit safe
//! prime: `(p - 1) / 2` is also prime.

/// Modulus size in bits.
pub const PRIME_BITS: u64 = 1080;

/// Modulus size in bytes. Also the fixed width of serialized keys.
pub const PRIME_BYTES: usize = 135;

/// Group generator.
pub const GENERATOR: u32 = 2;

/// The DH1080 safe prime, big-endian.
pub const PRIME_1080: [u8; PRIME_BYTES] = [
    0xFB, 0xE1, 0x02, 0x2E, 0x23, 0xD2, 0x13, 0xE8, 0xAC, 0xFA, 0x9A, 0xE8, 0xB9, 0xDF, 0xAD,
    0xA3, 0xEA, 0x6B, 0x7A, 0xC7, 0xA7, 0xB7, 0xE9, 0x5A, 0xB5, 0xEB, 0x2D, 0xF8, 0x58, 0x92,
    0x1F, 0xEA, 0xDE, 0x95, 0xE6, 0xAC, 0x7B, 0xE7, 0xDE, 0x6A, 0xDB, 0xAB, 0x8A, 0x78, 0x3E,
    0x7A, 0xF7, 0xA7, 0xFA, 0x6A, 0x2B, 0x7B, 0xEB, 0x1E, 0x72, 0xEA, 0xE2, 0xB7, 0x2F, 0x9F,
    0xA2, 0xBF, 0xB2, 0xA2, 0xEF, 0xBE, 0xFA, 0xC8, 0x68, 0xBA, 0xDB, 0x3E, 0x82, 0x8F, 0xA8,
    0xBA, 0xDF, 0xAD, 0xA3, 0xE4, 0xCC, 0x1B, 0xE7, 0xE8, 0xAF, 0xE8, 0x5E, 0x96, 0x98, 0xA7,
    0x83, 0xEB, 0x68, 0xFA, 0x07, 0xA7, 0x7A, 0xB6, 0xAD, 0x7B, 0xEB, 0x61, 0x8A, 0xCF, 0x9C,
    0xA2, 0x89, 0x7E, 0xB2, 0x8A, 0x61, 0x89, 0xEF, 0xA0, 0x7A, 0xB9, 0x9A, 0x8A, 0x7F, 0xA9,
    0xAE, 0x29, 0x9E, 0xFA, 0x7B, 0xA6, 0x6D, 0xEA, 0xFE, 0xFB, 0xEF, 0xBF, 0x0B, 0x7D, 0x8B,
];

/// SHA-256 digest length in bytes.
pub const SHA256_DIGEST_LENGTH: usize = 32;

/// Token alphabet (standard base64, no padding character).
pub const B64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Marker appended to a compact token whose base64 form needed no padding.
pub const NO_PADDING_MARKER: char = 'A';

/// Length of a compact token for a fixed-width (135-byte) key.
///
/// 135 bytes encode to 180 base64 chars with no padding, plus the marker.
pub const KEY_TOKEN_LENGTH: usize = 181;

/// Length of a compact token for a SHA-256 digest (44 chars minus `=`).
pub const SECRET_TOKEN_LENGTH: usize = 43;
