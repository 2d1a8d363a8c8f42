//! Conformance: Public Key Range
//!
//! A peer public value is accepted only when `1 < y < p - 1`.

use dh1080_core::encoding::encode_compact;
use dh1080_core::validate::is_valid_public_key;
use dh1080_core::{Dh1080, Dh1080Error, DomainParameters};
use num_bigint::BigUint;

fn dh1080() -> DomainParameters {
    DomainParameters::dh1080().expect("parameters")
}

#[test]
fn conformance_range_boundaries() {
    let params = dh1080();
    let p = params.modulus().clone();

    assert!(!is_valid_public_key(&params, &BigUint::from(0u32)));
    assert!(!is_valid_public_key(&params, &BigUint::from(1u32)));
    assert!(is_valid_public_key(&params, &BigUint::from(2u32)));
    assert!(is_valid_public_key(&params, &(&p / 2u32)));
    assert!(is_valid_public_key(&params, &(&p - 2u32)));
    assert!(!is_valid_public_key(&params, &(&p - 1u32)));
    assert!(!is_valid_public_key(&params, &p));
}

#[test]
fn conformance_derive_rejects_out_of_range_peer() {
    let params = dh1080();
    let dh = Dh1080::new().expect("parameters");
    let (priv_a, _) = dh.generate_key().expect("keygen");
    let p = params.modulus().clone();

    let hostile = [
        BigUint::from(0u32),
        BigUint::from(1u32),
        &p - 1u32,
        p.clone(),
        &p + 1u32,
    ];
    for value in &hostile {
        let token = encode_compact(&value.to_bytes_be());
        assert_eq!(
            dh.derive_secret(&priv_a, &token),
            Err(Dh1080Error::InvalidPublicKey),
            "value {value} accepted"
        );
    }
}

#[test]
fn conformance_generated_keys_in_range() {
    let dh = Dh1080::new().expect("parameters");
    for _ in 0..8 {
        let (_, pub_a) = dh.generate_key().expect("keygen");
        let y = dh.decode_public_key(&pub_a).expect("generated key must validate");
        assert!(is_valid_public_key(dh.parameters(), &y));
    }
}
