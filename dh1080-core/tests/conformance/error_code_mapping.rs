//! Conformance: Error Code Mapping
//!
//! Display strings and stable codes of `Dh1080Error` are part of the
//! contract with the calling protocol layer.

use dh1080_core::errors::{is_valid_error_code, ERROR_CODES};
use dh1080_core::Dh1080Error;

#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(Dh1080Error, &str)> = vec![
        (
            Dh1080Error::Init("modulus must be odd and > 5".into()),
            "Init error: modulus must be odd and > 5",
        ),
        (Dh1080Error::Uninitialized, "DH1080 is not initialized"),
        (Dh1080Error::AlreadyInitialized, "DH1080 is already initialized"),
        (Dh1080Error::InvalidCharset, "Invalid charset in key token"),
        (
            Dh1080Error::Encoding("invalid base64".into()),
            "Encoding error: invalid base64",
        ),
        (Dh1080Error::InvalidPublicKey, "Invalid public key"),
        (
            Dh1080Error::Keygen("rng failure".into()),
            "Keygen error: rng failure",
        ),
        (
            Dh1080Error::Derive("degenerate shared value".into()),
            "Derive error: degenerate shared value",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(error.to_string(), *expected, "Dh1080Error display drift");
        assert!(is_valid_error_code(error.code()));
    }
    assert_eq!(cases.len(), ERROR_CODES.len());
}

#[test]
fn conformance_error_codes_stable() {
    assert_eq!(Dh1080Error::InvalidCharset.code(), "INVALID_CHARSET");
    assert_eq!(Dh1080Error::InvalidPublicKey.code(), "INVALID_PUBLIC_KEY");
    assert_eq!(Dh1080Error::Uninitialized.code(), "NOT_INITIALIZED");
    assert_eq!(Dh1080Error::Derive(String::new()).code(), "DERIVE_FAILED");
    assert_eq!(Dh1080Error::Keygen(String::new()).code(), "KEYGEN_FAILED");
}
