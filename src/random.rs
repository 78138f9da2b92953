//! Random (version 4) UUID generation.
//!
//! Randomness comes in through the [`EntropySource`] trait rather than a
//! hard-wired RNG call, so the algorithm itself stays deterministic and
//! testable. [`OsEntropy`] is the production source, backed by the
//! operating system CSPRNG.

use crate::uuid::{set_version, Uuid, UUID_BYTES};
use crate::{UuidError, UuidResult};

/// A source of random bytes for UUID generation.
///
/// Implementations are expected to be cryptographically secure in
/// production; deterministic sources are useful in tests.
pub trait EntropySource {
    /// Fills `buffer` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::EntropySourceUnavailable`] if random bytes
    /// cannot be supplied.
    fn fill_bytes(&mut self, buffer: &mut [u8]) -> UuidResult<()>;
}

/// The operating system entropy source.
///
/// Delegates to the platform CSPRNG (`/dev/urandom`, `getrandom(2)`,
/// `BCryptGenRandom` and so on, depending on the target).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buffer: &mut [u8]) -> UuidResult<()> {
        getrandom::fill(buffer)
            .map_err(|error| UuidError::EntropySourceUnavailable(error.to_string()))
    }
}

/// Generates a random (version 4) UUID from the operating system
/// entropy source.
///
/// # Returns
///
/// A UUID with 122 random bits, version 4 and the RFC 4122 variant
///
/// # Errors
///
/// Returns [`UuidError::EntropySourceUnavailable`] if the operating
/// system cannot supply random bytes.
pub fn uuid4() -> UuidResult<Uuid> {
    uuid4_with(&mut OsEntropy)
}

/// Generates a random (version 4) UUID from the given entropy source.
///
/// Draws 16 bytes from `entropy`, then overwrites the version and
/// variant fields per RFC 4122 section 4.4. The remaining 122 bits are
/// taken from the source unchanged.
///
/// # Arguments
///
/// * `entropy` - The source supplying the random bytes
///
/// # Returns
///
/// A UUID with version 4 and the RFC 4122 variant
///
/// # Errors
///
/// Returns [`UuidError::EntropySourceUnavailable`] if the source cannot
/// supply random bytes.
pub fn uuid4_with(entropy: &mut impl EntropySource) -> UuidResult<Uuid> {
    let mut octets = [0u8; UUID_BYTES];
    entropy.fill_bytes(&mut octets)?;
    set_version(&mut octets, 4);
    Ok(Uuid::from_octets(octets))
}
