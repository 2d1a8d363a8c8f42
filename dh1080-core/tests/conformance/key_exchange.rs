//! Conformance: Key Exchange
//!
//! Invariants under test:
//! - Both peers derive the same secret token
//! - Secret tokens are 43 compact base64 characters (32-byte digest)
//! - Public tokens use only the wire alphabet and never contain `=`
//! - Tampering with a public token either fails validation or changes
//!   the secret; it never panics and never yields an empty success

use dh1080_core::constants::{KEY_TOKEN_LENGTH, SECRET_TOKEN_LENGTH};
use dh1080_core::encoding::is_b64_charset;
use dh1080_core::{Dh1080, Dh1080Error};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// ── Conformance: End-to-End ─────────────────────────────────────

#[test]
fn conformance_exchange_end_to_end() {
    let dh = Dh1080::new().expect("parameters");

    let (priv_a, pub_a) = dh.generate_key().expect("keygen A");
    let (priv_b, pub_b) = dh.generate_key().expect("keygen B");

    for token in [&pub_a, &pub_b] {
        assert_eq!(token.len(), KEY_TOKEN_LENGTH);
        assert!(is_b64_charset(token), "public token off-alphabet: {token}");
        assert!(!token.contains('='));
    }

    let secret_a = dh.derive_secret(&priv_a, &pub_b).expect("derive A");
    let secret_b = dh.derive_secret(&priv_b, &pub_a).expect("derive B");

    assert_eq!(secret_a, secret_b, "peers disagree on secret");
    assert_eq!(secret_a.len(), SECRET_TOKEN_LENGTH);
    assert!(is_b64_charset(&secret_a));
}

// ── Conformance: Symmetry Over Many Pairs ───────────────────────

#[test]
fn conformance_exchange_symmetric_8_pairs() {
    let dh = Dh1080::new().expect("parameters");
    let mut secrets = std::collections::HashSet::new();

    for round in 0..8 {
        let (priv_a, pub_a) = dh.generate_key().expect("keygen A");
        let (priv_b, pub_b) = dh.generate_key().expect("keygen B");

        let ab = dh.derive_secret(&priv_a, &pub_b).expect("derive A");
        let ba = dh.derive_secret(&priv_b, &pub_a).expect("derive B");
        assert_eq!(ab, ba, "asymmetric secret at round {round}");
        assert!(secrets.insert(ab), "secret repeated at round {round}");
    }
}

// ── Conformance: Derivation Is Deterministic ────────────────────

#[test]
fn conformance_derive_deterministic() {
    let dh = Dh1080::new().expect("parameters");
    let (priv_a, _) = dh.generate_key().expect("keygen A");
    let (_, pub_b) = dh.generate_key().expect("keygen B");

    let reference = dh.derive_secret(&priv_a, &pub_b).expect("derive");
    for round in 1..=5 {
        assert_eq!(
            dh.derive_secret(&priv_a, &pub_b).expect("derive"),
            reference,
            "secret drift at round {round}"
        );
    }
}

// ── Conformance: Tamper ─────────────────────────────────────────

#[test]
fn conformance_tampered_public_token_never_matches() {
    let dh = Dh1080::new().expect("parameters");
    let (priv_a, _) = dh.generate_key().expect("keygen A");
    let (_, pub_b) = dh.generate_key().expect("keygen B");
    let honest = dh.derive_secret(&priv_a, &pub_b).expect("derive");

    // Flip a spread of positions, including the leading and the marker char.
    for pos in [0, 1, 17, 90, 178, 179, KEY_TOKEN_LENGTH - 1] {
        let mut bytes = pub_b.clone().into_bytes();
        let current = ALPHABET.iter().position(|&c| c == bytes[pos]).expect("alphabet");
        bytes[pos] = ALPHABET[(current + 1) % ALPHABET.len()];
        let tampered = String::from_utf8(bytes).expect("ascii");

        match dh.derive_secret(&priv_a, &tampered) {
            Ok(secret) => {
                assert!(!secret.is_empty());
                assert_ne!(secret, honest, "tamper at {pos} went unnoticed");
            }
            Err(e) => assert!(
                matches!(
                    e,
                    Dh1080Error::InvalidPublicKey
                        | Dh1080Error::Encoding(_)
                        | Dh1080Error::Derive(_)
                ),
                "unexpected error at {pos}: {e}"
            ),
        }
    }
}

#[test]
fn conformance_charset_rejected_before_parse() {
    let dh = Dh1080::new().expect("parameters");
    let (priv_a, pub_a) = dh.generate_key().expect("keygen");

    assert_eq!(
        dh.derive_secret(&priv_a, "not-base64!!"),
        Err(Dh1080Error::InvalidCharset)
    );
    assert_eq!(
        dh.derive_secret(&format!("{}=", &*priv_a), &pub_a),
        Err(Dh1080Error::InvalidCharset)
    );
    assert_eq!(
        dh.derive_secret(&priv_a, &format!("{pub_a} CBC")),
        Err(Dh1080Error::InvalidCharset)
    );
}
