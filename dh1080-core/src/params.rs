//! Domain parameters: the fixed DH1080 group.
//!
//! Built once, then shared read-only (typically behind an `Arc`) by
//! every generate/derive call. There is no mutation after construction,
//! so concurrent readers need no locking.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{GENERATOR, PRIME_1080, PRIME_BITS};
use crate::errors::Dh1080Error;

/// Prime modulus and generator of a Diffie-Hellman group.
///
/// Both values are set together and never change. `p - 1` is cached
/// because every public key check compares against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParameters {
    modulus: BigUint,
    generator: BigUint,
    modulus_minus_one: BigUint,
}

impl DomainParameters {
    /// The canonical DH1080 group: 1080-bit safe prime, generator 2.
    ///
    /// # Errors
    /// Returns `Dh1080Error::Init` if the embedded prime does not decode
    /// to a 1080-bit value.
    pub fn dh1080() -> Result<Self, Dh1080Error> {
        let params = Self::from_be_bytes(&PRIME_1080, GENERATOR)?;
        if params.bits() != PRIME_BITS {
            return Err(Dh1080Error::Init(format!(
                "prime is {} bits, expected {PRIME_BITS}",
                params.bits()
            )));
        }
        Ok(params)
    }

    /// Build parameters from a big-endian modulus and a small generator.
    ///
    /// The modulus must be odd and greater than 5, and the generator
    /// must satisfy `1 < g < p - 1`. Primality is not checked; callers
    /// outside tests should use [`DomainParameters::dh1080`].
    ///
    /// # Errors
    /// Returns `Dh1080Error::Init` when either value is out of range.
    pub fn from_be_bytes(modulus: &[u8], generator: u32) -> Result<Self, Dh1080Error> {
        let modulus = BigUint::from_bytes_be(modulus);
        if modulus <= BigUint::from(5u32) || !modulus.bit(0) {
            return Err(Dh1080Error::Init("modulus must be odd and > 5".into()));
        }

        let modulus_minus_one = &modulus - BigUint::one();
        let generator = BigUint::from(generator);
        if generator <= BigUint::one() || generator >= modulus_minus_one {
            return Err(Dh1080Error::Init("generator must satisfy 1 < g < p - 1".into()));
        }

        Ok(Self {
            modulus,
            generator,
            modulus_minus_one,
        })
    }

    /// Prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// `p - 1`, the exclusive upper bound for valid public values.
    pub fn modulus_minus_one(&self) -> &BigUint {
        &self.modulus_minus_one
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Modulus size in bytes; the width of serialized keys.
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }
}
