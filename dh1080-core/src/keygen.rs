//! Key pair generation.
//!
//! A DH1080 key pair is a private exponent `x` and its public value
//! `y = g^x mod p`. Only the private exponent is ever stored by callers;
//! the public value is recomputed whenever it is needed again.
//!
//! Both halves are serialized fixed-width (`PRIME_BYTES`, left zero
//! padded) before compact encoding, so key tokens are always
//! `KEY_TOKEN_LENGTH` characters for the DH1080 group.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::encoding::encode_compact;
use crate::errors::Dh1080Error;
use crate::params::DomainParameters;
use crate::validate::is_valid_public_key;

/// Upper bound on rejection-sampling rounds before giving up.
const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// A DH key pair under some [`DomainParameters`].
///
/// The private exponent is held as a fixed-width big-endian buffer that
/// is zeroized on drop.
pub struct KeyPair {
    private_exponent: Zeroizing<Vec<u8>>,
    public_value: BigUint,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_exponent", &"<redacted>")
            .field("public_value", &self.public_value)
            .finish()
    }
}

impl KeyPair {
    /// Generate a fresh key pair from the OS CSPRNG.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Keygen` if the RNG fails or no valid
    /// exponent is found.
    pub fn generate(params: &DomainParameters) -> Result<Self, Dh1080Error> {
        Self::generate_with_rng(params, &mut OsRng)
    }

    /// Generate a key pair from a caller-supplied RNG.
    ///
    /// The private exponent is uniform over `[2, p - 2]`. Exponents whose
    /// public value would fail [`is_valid_public_key`] are resampled.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Keygen` if the RNG fails or no valid
    /// exponent is found.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        params: &DomainParameters,
        rng: &mut R,
    ) -> Result<Self, Dh1080Error> {
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            let exponent = sample_private_exponent(params, rng)?;
            let public_value = params.generator().modpow(&exponent, params.modulus());
            if is_valid_public_key(params, &public_value) {
                return Ok(Self {
                    private_exponent: to_fixed_be(&exponent, params.byte_len())
                        .map_err(|e| Dh1080Error::Keygen(e.to_string()))?,
                    public_value,
                });
            }
        }
        Err(Dh1080Error::Keygen("no usable private exponent found".into()))
    }

    /// Rebuild a key pair from a stored private exponent, recomputing the
    /// public value.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Keygen` if the exponent is zero, wider than
    /// the modulus, or yields a public value outside `1 < y < p - 1`.
    pub fn from_private_exponent(
        params: &DomainParameters,
        exponent: &BigUint,
    ) -> Result<Self, Dh1080Error> {
        if exponent.is_zero() {
            return Err(Dh1080Error::Keygen("private exponent is zero".into()));
        }
        let private_exponent = to_fixed_be(exponent, params.byte_len())
            .map_err(|e| Dh1080Error::Keygen(e.to_string()))?;

        let public_value = params.generator().modpow(exponent, params.modulus());
        if !is_valid_public_key(params, &public_value) {
            return Err(Dh1080Error::Keygen(
                "private exponent yields a degenerate public value".into(),
            ));
        }

        Ok(Self {
            private_exponent,
            public_value,
        })
    }

    /// The private exponent `x`.
    pub fn private_exponent(&self) -> BigUint {
        BigUint::from_bytes_be(&self.private_exponent)
    }

    /// The public value `g^x mod p`.
    pub fn public_value(&self) -> &BigUint {
        &self.public_value
    }

    /// Compact token for the private exponent. Keep it in volatile memory.
    pub fn private_token(&self) -> Zeroizing<String> {
        Zeroizing::new(encode_compact(&self.private_exponent))
    }

    /// Compact token for the public value, ready to send to the peer.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Encoding` if the public value is wider than
    /// the modulus (cannot happen for values produced by this type).
    pub fn public_token(&self, params: &DomainParameters) -> Result<String, Dh1080Error> {
        let buf = to_fixed_be(&self.public_value, params.byte_len())?;
        Ok(encode_compact(&buf))
    }
}

/// Generate a key pair and return `(private_token, public_token)`.
///
/// Either both tokens are returned or neither is. Every raw key buffer is
/// wiped before returning.
///
/// # Errors
/// Returns `Dh1080Error::Keygen` on any generation or encoding failure.
pub fn generate_key(params: &DomainParameters) -> Result<(Zeroizing<String>, String), Dh1080Error> {
    let pair = KeyPair::generate(params)?;
    let public_token = pair
        .public_token(params)
        .map_err(|e| Dh1080Error::Keygen(e.to_string()))?;
    let private_token = pair.private_token();

    debug!(
        public_token_len = public_token.len(),
        "dh1080 key pair generated"
    );
    Ok((private_token, public_token))
}

/// Serialize `value` big-endian into exactly `width` bytes, left padded
/// with zeros.
///
/// # Errors
/// Returns `Dh1080Error::Encoding` if `value` needs more than `width` bytes.
pub fn to_fixed_be(value: &BigUint, width: usize) -> Result<Zeroizing<Vec<u8>>, Dh1080Error> {
    let raw = Zeroizing::new(value.to_bytes_be());
    if raw.len() > width {
        return Err(Dh1080Error::Encoding(format!(
            "value needs {} bytes, buffer holds {width}",
            raw.len()
        )));
    }
    let mut buf = Zeroizing::new(vec![0u8; width]);
    buf[width - raw.len()..].copy_from_slice(&raw);
    Ok(buf)
}

/// Draw a private exponent uniformly from `[2, p - 2]`.
fn sample_private_exponent<R: RngCore + CryptoRng>(
    params: &DomainParameters,
    rng: &mut R,
) -> Result<BigUint, Dh1080Error> {
    let low = BigUint::from(2u32);
    let high = params.modulus() - 2u32;
    let width = params.byte_len();
    let excess_bits = (width as u64 * 8 - params.bits()) as u32;

    let mut buf = Zeroizing::new(vec![0u8; width]);
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(&mut buf[..])
            .map_err(|e| Dh1080Error::Keygen(format!("rng failure: {e}")))?;
        buf[0] &= 0xff >> excess_bits;

        let candidate = BigUint::from_bytes_be(&buf);
        if candidate >= low && candidate <= high {
            return Ok(candidate);
        }
    }
    Err(Dh1080Error::Keygen("rejection sampling exhausted".into()))
}
