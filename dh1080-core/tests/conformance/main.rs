//! Conformance Harness: DH1080 Core Invariant Tests
//!
//! Invariant coverage:
//! - Key exchange symmetry and end-to-end flow
//! - Tamper resistance (flipped token characters never yield a silent match)
//! - Public key range rejection (0, 1, p-1, p and above)
//! - Compact base64 round-trip and wire alphabet
//! - Error code mapping stability

mod compact_codec;
mod error_code_mapping;
mod key_exchange;
mod public_key_range;
