//! Deterministic golden vector generator.
//!
//! Produces the JSON committed at `tests/vectors/dh1080.vectors.json`.
//! Private exponents come from a fixed label expansion instead of an
//! RNG, so any DH1080 implementation can regenerate the same file:
//!
//! ```text
//! material = SHA-256(label || 0x00) || ... || SHA-256(label || 0x04)
//! x        = int_be(material[..135]) mod (p - 3) + 2
//! ```
//!
//! Test use only (`--features vectors`).

use num_bigint::BigUint;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::constants::{GENERATOR, PRIME_1080, PRIME_BYTES};
use crate::encoding::{encode_compact, from_hex, to_hex};
use crate::errors::Dh1080Error;
use crate::hash::sha256;
use crate::keygen::KeyPair;
use crate::params::DomainParameters;

/// Exchange case labels: (case name, alice label, bob label).
const EXCHANGE_LABELS: [(&str, &str, &str); 3] = [
    ("alice-bob", "alice", "bob"),
    ("carol-dave", "carol", "dave"),
    ("erin-frank", "erin", "frank"),
];

/// Codec case inputs: (case name, hex bytes).
const CODEC_INPUTS: [(&str, &str); 6] = [
    ("empty", ""),
    ("one-byte", "ff"),
    ("two-bytes", "0102"),
    ("three-bytes", "000102"),
    ("four-bytes", "deadbeef"),
    ("six-bytes", "00ff00ff00ff"),
];

#[derive(Serialize)]
struct VectorFile {
    version: u32,
    prime_hex: String,
    generator: u32,
    exchange_cases: Vec<ExchangeCase>,
    codec_cases: Vec<CodecCase>,
}

#[derive(Serialize)]
struct ExchangeCase {
    name: String,
    alice_private: String,
    alice_public: String,
    bob_private: String,
    bob_public: String,
    shared_secret: String,
}

#[derive(Serialize)]
struct CodecCase {
    name: String,
    bytes_hex: String,
    encoded: String,
}

/// Expand `label` into a private exponent in `[2, p - 2]`.
pub fn deterministic_private_exponent(params: &DomainParameters, label: &str) -> BigUint {
    let mut material = Zeroizing::new(Vec::with_capacity(5 * 32));
    for counter in 0u8..5 {
        let mut input = label.as_bytes().to_vec();
        input.push(counter);
        material.extend_from_slice(&sha256(&input));
    }
    let candidate = BigUint::from_bytes_be(&material[..PRIME_BYTES]);
    candidate % (params.modulus() - 3u32) + 2u32
}

fn exchange_case(
    params: &DomainParameters,
    name: &str,
    alice_label: &str,
    bob_label: &str,
) -> Result<ExchangeCase, Dh1080Error> {
    let alice =
        KeyPair::from_private_exponent(params, &deterministic_private_exponent(params, alice_label))?;
    let bob =
        KeyPair::from_private_exponent(params, &deterministic_private_exponent(params, bob_label))?;

    let alice_public = alice.public_token(params)?;
    let bob_public = bob.public_token(params)?;
    let shared_secret = crate::derive::derive_secret(params, &alice.private_token(), &bob_public)?;

    Ok(ExchangeCase {
        name: name.into(),
        alice_private: alice.private_token().to_string(),
        alice_public,
        bob_private: bob.private_token().to_string(),
        bob_public,
        shared_secret,
    })
}

/// Generate the DH1080 golden vector file as pretty JSON.
///
/// # Errors
/// Propagates any key construction or encoding failure.
pub fn generate_dh1080_json() -> Result<String, Dh1080Error> {
    let params = DomainParameters::dh1080()?;

    let exchange_cases = EXCHANGE_LABELS
        .iter()
        .map(|(name, alice, bob)| exchange_case(&params, name, alice, bob))
        .collect::<Result<Vec<_>, _>>()?;

    let codec_cases = CODEC_INPUTS
        .iter()
        .map(|(name, hex)| {
            Ok(CodecCase {
                name: (*name).into(),
                bytes_hex: (*hex).into(),
                encoded: encode_compact(&from_hex(hex)?),
            })
        })
        .collect::<Result<Vec<_>, Dh1080Error>>()?;

    let file = VectorFile {
        version: 1,
        prime_hex: to_hex(&PRIME_1080),
        generator: GENERATOR,
        exchange_cases,
        codec_cases,
    };

    serde_json::to_string_pretty(&file).map_err(|e| Dh1080Error::Encoding(e.to_string()))
}
