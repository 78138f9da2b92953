//! RFC4122 UUIDs: a 128-bit identifier type with canonical codecs and
//! version 3/4/5 generation.
//!
//! This crate implements the UUID value type itself: the exact bit layout,
//! the canonical 36-character string form, the 16-byte big-endian binary
//! form, byte-lexicographic ordering, and the three generation algorithms
//! defined by [RFC 4122](https://tools.ietf.org/html/rfc4122) that do not
//! depend on a clock:
//!
//! - **Version 4**: random, from the platform entropy source ([`uuid4`]).
//! - **Version 3**: name-based via MD5 ([`uuid3_of`]).
//! - **Version 5**: name-based via SHA-1 ([`uuid5_of`]).
//!
//! Platform concerns stay behind capability traits: entropy is supplied
//! through [`EntropySource`] (defaulting to the operating system CSPRNG)
//! and digests through [`UuidHasher`], so custom sources and algorithms
//! plug in without touching the core.
//!
//! ## Canonical forms
//!
//! - String: exactly 36 characters, `8-4-4-4-12` lowercase hex groups with
//!   hyphens at indices 8, 13, 18 and 23. Parsing accepts either case;
//!   formatting always emits lowercase.
//! - Binary: 16 bytes, big-endian. Byte 0 is the most significant byte of
//!   the most significant half; byte 15 is the least significant byte of
//!   the least significant half.
//!
//! Both forms round-trip exactly.
//!
//! ## Example
//!
//! ```
//! use uuid128::{uuid5_of, Uuid};
//!
//! let id = Uuid::parse("550e8400-e29b-41d4-a716-446655440000")?;
//! assert_eq!(id.version(), 4);
//!
//! let derived = uuid5_of(&Uuid::NAMESPACE_DNS, "www.example.com");
//! assert_eq!(derived.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! # Ok::<(), uuid128::UuidError>(())
//! ```
//!
//! ## Serde
//!
//! With the default `serde` feature, [`Uuid`] serialises as the canonical
//! lowercase string. The [`serde_support`] module adds `with`-modules for
//! uppercase-string and base64-binary wire formats; every deserialisation
//! path accepts all three encodings, so producers can switch formats
//! without breaking existing readers.

mod name_based;
mod random;
#[cfg(feature = "serde")]
pub mod serde_support;
mod uuid;

// Re-export public types
pub use name_based::{name_based_uuid_of, uuid3_of, uuid5_of, Md5Hasher, Sha1Hasher, UuidHasher};
pub use random::{uuid4, uuid4_with, EntropySource, OsEntropy};
pub use uuid::{uuid_from, uuid_of, Uuid};

/// Errors that can occur when constructing or generating UUIDs.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Byte input was not exactly 16 bytes long
    #[error("Invalid UUID bytes: expected 16 bytes, found {0}")]
    InvalidLength(usize),

    /// String input was not 36 characters long, or a hyphen was misplaced
    #[error("Invalid UUID string format: '{0}'")]
    InvalidFormat(String),

    /// String input held a non-hex character in a digit position
    #[error("Invalid character in UUID string: '{0}'")]
    InvalidCharacter(String),

    /// The platform entropy source could not supply random bytes
    #[error("Entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
