//! Process-wide lifecycle surface.
//!
//! Mirrors the classic plugin interface: `initialize` once at startup,
//! call `generate_key` / `derive_secret` from anywhere, `shutdown` at
//! exit. Parameters live in a single slot guarded by a `RwLock`; every
//! operation clones the inner `Arc` under a short read lock and then
//! computes without holding it, so a `shutdown` racing an in-flight call
//! never frees parameters that call is still using.
//!
//! New code that can pass a handle around should prefer
//! [`crate::context::Dh1080`] directly.

use std::sync::Arc;

use parking_lot::{const_rwlock, RwLock};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::context::Dh1080;
use crate::errors::Dh1080Error;
use crate::params::DomainParameters;

static PARAMS: RwLock<Option<Arc<DomainParameters>>> = const_rwlock(None);

/// Construct the DH1080 parameters.
///
/// # Errors
/// - `Dh1080Error::AlreadyInitialized` if called twice without `shutdown`.
/// - `Dh1080Error::Init` if parameter construction fails.
pub fn try_initialize() -> Result<(), Dh1080Error> {
    let mut slot = PARAMS.write();
    if slot.is_some() {
        return Err(Dh1080Error::AlreadyInitialized);
    }
    *slot = Some(Arc::new(DomainParameters::dh1080()?));
    debug!("dh1080 parameters initialized");
    Ok(())
}

/// Construct the DH1080 parameters; `false` on failure or double init.
pub fn initialize() -> bool {
    match try_initialize() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "dh1080 initialize failed");
            false
        }
    }
}

/// Release the parameters. Safe to call when never initialized.
pub fn shutdown() {
    if PARAMS.write().take().is_some() {
        debug!("dh1080 parameters released");
    }
}

/// Returns `true` between a successful `initialize` and `shutdown`.
pub fn is_initialized() -> bool {
    PARAMS.read().is_some()
}

/// Handle over the current parameters.
///
/// # Errors
/// Returns `Dh1080Error::Uninitialized` outside `initialize`/`shutdown`.
pub fn handle() -> Result<Dh1080, Dh1080Error> {
    PARAMS
        .read()
        .as_ref()
        .map(|params| Dh1080::with_parameters(Arc::clone(params)))
        .ok_or(Dh1080Error::Uninitialized)
}

/// Generate a key pair as `(private_token, public_token)`.
///
/// # Errors
/// `Dh1080Error::Uninitialized`, or `Dh1080Error::Keygen` on failure.
pub fn generate_key() -> Result<(Zeroizing<String>, String), Dh1080Error> {
    handle()?.generate_key()
}

/// Derive the secret token from our private token and the peer's public
/// token.
///
/// # Errors
/// `Dh1080Error::Uninitialized`, or any error of
/// [`crate::derive::derive_secret`].
pub fn derive_secret(private_token: &str, peer_public_token: &str) -> Result<String, Dh1080Error> {
    handle()?.derive_secret(private_token, peer_public_token)
}
