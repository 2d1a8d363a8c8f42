//! DH1080 Core: fixed-group Diffie-Hellman key exchange for chat peers.
//!
//! Two peers exchange compact base64 public key tokens over a plaintext
//! line protocol, then each derives the same secret token (SHA-256 of
//! the shared value, compact encoded) to key a symmetric cipher. This
//! crate is a pure transform: no network, UI or storage.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | 1080-bit prime, generator, token lengths |
//! | [`errors`] | `Dh1080Error` and stable error codes |
//! | [`encoding`] | Compact base64 codec, charset check, hex |
//! | [`hash`] | SHA-256 and the secret-token step |
//! | [`params`] | Immutable domain parameters |
//! | [`validate`] | Public key range check |
//! | [`keygen`] | Key pair generation |
//! | [`derive`] | Shared secret derivation |
//! | [`context`] | `Dh1080` handle (injected parameters) |
//! | [`global`] | `initialize` / `shutdown` process-wide surface |
//! | [`vectors`] | Golden vector generator (test-only) |
//!
//! # Exchange
//!
//! ```text
//! A: (x_a, y_a) = generate_key()      B: (x_b, y_b) = generate_key()
//!    send y_a  ───────────────────────────►
//!              ◄───────────────────────────  send y_b
//!    derive_secret(x_a, y_b)  ==  derive_secret(x_b, y_a)
//! ```
//!
//! There is no authentication of the peer; trust-on-first-use is the
//! calling protocol's responsibility.

/// Protocol constants: the DH1080 group and token shapes.
pub mod constants;

/// Error types for dh1080-core operations.
pub mod errors;

/// Encoding utilities: compact base64, standard base64 and hex.
pub mod encoding;

/// Hashing utilities: SHA-256.
pub mod hash;

/// Domain parameters: modulus and generator.
pub mod params;

/// Public key validation.
pub mod validate;

/// Key pair generation.
pub mod keygen;

/// Shared secret derivation.
pub mod derive;

/// `Dh1080` handle over shared parameters.
pub mod context;

/// Process-wide initialize/shutdown surface.
pub mod global;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use context::Dh1080;
pub use errors::Dh1080Error;
pub use keygen::KeyPair;
pub use params::DomainParameters;
