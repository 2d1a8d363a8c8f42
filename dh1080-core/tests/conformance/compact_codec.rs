//! Conformance: Compact Base64 Codec
//!
//! - Round-trip for every length from 0 to the modulus width
//! - Output never contains `=` and stays inside the wire alphabet
//! - Output length is either `4n + 1` ending in `A`, or `4n + 2` / `4n + 3`

use dh1080_core::constants::PRIME_BYTES;
use dh1080_core::encoding::{decode_compact, encode_compact, is_b64_charset};
use proptest::prelude::*;

proptest! {
    #[test]
    fn conformance_round_trip(data in proptest::collection::vec(any::<u8>(), 0..=PRIME_BYTES)) {
        let token = encode_compact(&data);
        prop_assert_eq!(decode_compact(&token).expect("decode"), data);
    }

    #[test]
    fn conformance_wire_shape(data in proptest::collection::vec(any::<u8>(), 0..=PRIME_BYTES)) {
        let token = encode_compact(&data);
        prop_assert!(is_b64_charset(&token));
        match token.len() % 4 {
            1 => prop_assert!(token.ends_with('A')),
            2 | 3 => {}
            other => prop_assert!(false, "token length residue {}", other),
        }
    }

    #[test]
    fn conformance_charset_matches_alphabet(s in "\\PC{0,40}") {
        let expected = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/');
        prop_assert_eq!(is_b64_charset(&s), expected);
    }
}

#[test]
fn conformance_every_length_round_trips() {
    for len in 0..=PRIME_BYTES {
        let data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        assert_eq!(
            decode_compact(&encode_compact(&data)).expect("decode"),
            data,
            "round-trip failed at length {len}"
        );
    }
}
