//! `Dh1080` handle: parameters plus operations.
//!
//! The handle owns an `Arc` to immutable [`DomainParameters`]; cloning it
//! is cheap and clones may be moved to worker threads. Callers embedding
//! this in an event loop should run `generate_key` / `derive_secret` off
//! the UI thread, since each call performs 1080-bit modular
//! exponentiations.

use std::sync::Arc;

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::Dh1080Error;
use crate::params::DomainParameters;
use crate::{derive, keygen, validate};

/// Entry point for DH1080 key exchange with injected parameters.
#[derive(Debug, Clone)]
pub struct Dh1080 {
    params: Arc<DomainParameters>,
}

impl Dh1080 {
    /// Build a handle over the canonical DH1080 group.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Init` if parameter construction fails.
    pub fn new() -> Result<Self, Dh1080Error> {
        Ok(Self::with_parameters(Arc::new(DomainParameters::dh1080()?)))
    }

    /// Build a handle over already constructed parameters.
    pub fn with_parameters(params: Arc<DomainParameters>) -> Self {
        Self { params }
    }

    /// The shared domain parameters.
    pub fn parameters(&self) -> &DomainParameters {
        &self.params
    }

    /// Generate a fresh key pair as `(private_token, public_token)`.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Keygen` on failure; no partial output.
    pub fn generate_key(&self) -> Result<(Zeroizing<String>, String), Dh1080Error> {
        keygen::generate_key(&self.params)
    }

    /// Derive the secret token from our private token and the peer's
    /// public token.
    ///
    /// # Errors
    /// See [`derive::derive_secret`].
    pub fn derive_secret(
        &self,
        private_token: &str,
        peer_public_token: &str,
    ) -> Result<String, Dh1080Error> {
        derive::derive_secret(&self.params, private_token, peer_public_token)
    }

    /// Vet a peer public key token on receipt.
    ///
    /// # Errors
    /// See [`validate::decode_public_key`].
    pub fn decode_public_key(&self, token: &str) -> Result<BigUint, Dh1080Error> {
        validate::decode_public_key(&self.params, token)
    }
}
