//! The UUID value type and its canonical codecs.
//!
//! A [`Uuid`] is an immutable 128-bit value held as two 64-bit halves. The
//! canonical binary form is 16 bytes in big-endian order; the canonical
//! string form is the 36-character `8-4-4-4-12` hyphenated hex layout from
//! RFC 4122. Both codecs here round-trip exactly, and ordering is defined
//! over the binary form so that sorted UUIDs and sorted canonical strings
//! agree.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::{UuidError, UuidResult};

/// Number of bytes in the binary form of a UUID.
pub(crate) const UUID_BYTES: usize = 16;

/// Number of characters in the canonical string form of a UUID.
pub(crate) const UUID_STRING_LENGTH: usize = 36;

/// Positions of the hyphen separators within the canonical string form.
const UUID_HYPHEN_INDICES: [usize; 4] = [8, 13, 18, 23];

/// Character ranges of the five hex groups within the canonical string form.
const UUID_CHAR_RANGES: [Range<usize>; 5] = [0..8, 9..13, 14..18, 19..23, 24..36];

/// Byte ranges of the binary form corresponding to each hex group.
const UUID_BYTE_RANGES: [Range<usize>; 5] = [0..4, 4..6, 6..8, 8..10, 10..16];

/// Digits used when formatting; output is always lowercase.
const UUID_CHARS: &[u8; 16] = b"0123456789abcdef";

/// An RFC 4122 universally unique identifier.
///
/// The 128 bits are stored as a most-significant and a least-significant
/// 64-bit half, mirroring the big-endian binary form: byte 0 of
/// [`bytes`](Uuid::bytes) is the top byte of [`msb`](Uuid::msb) and byte 15
/// is the bottom byte of [`lsb`](Uuid::lsb).
///
/// `Uuid` is `Copy` and orders byte-lexicographically, so it can be used
/// directly as a map key or sorted without further ceremony.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid {
    msb: u64,
    lsb: u64,
}

impl Uuid {
    /// The nil UUID, with all 128 bits set to zero.
    pub const NIL: Uuid = Uuid::from_parts(0, 0);

    /// Name-space identifier for fully-qualified domain names
    /// (RFC 4122 appendix C).
    pub const NAMESPACE_DNS: Uuid = Uuid::from_parts(0x6ba7b8109dad11d1, 0x80b400c04fd430c8);

    /// Name-space identifier for URLs (RFC 4122 appendix C).
    pub const NAMESPACE_URL: Uuid = Uuid::from_parts(0x6ba7b8119dad11d1, 0x80b400c04fd430c8);

    /// Name-space identifier for ISO object identifiers (RFC 4122 appendix C).
    pub const NAMESPACE_OID: Uuid = Uuid::from_parts(0x6ba7b8129dad11d1, 0x80b400c04fd430c8);

    /// Name-space identifier for X.500 distinguished names
    /// (RFC 4122 appendix C).
    pub const NAMESPACE_X500: Uuid = Uuid::from_parts(0x6ba7b8149dad11d1, 0x80b400c04fd430c8);

    /// Constructs a UUID from its two 64-bit halves.
    ///
    /// No validation is performed; any pair of halves is a representable
    /// UUID, including ones whose version and variant fields are
    /// meaningless.
    ///
    /// # Arguments
    ///
    /// * `msb` - The most significant 64 bits (bytes 0 to 7)
    /// * `lsb` - The least significant 64 bits (bytes 8 to 15)
    ///
    /// # Returns
    ///
    /// The UUID with exactly those 128 bits
    pub const fn from_parts(msb: u64, lsb: u64) -> Self {
        Self { msb, lsb }
    }

    /// Constructs a UUID from its 16-byte big-endian binary form.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The binary form; must be exactly 16 bytes long
    ///
    /// # Returns
    ///
    /// The UUID whose binary form is `bytes`
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `bytes` is not exactly
    /// 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> UuidResult<Self> {
        let octets: [u8; UUID_BYTES] = bytes
            .try_into()
            .map_err(|_| UuidError::InvalidLength(bytes.len()))?;
        Ok(Self::from_octets(octets))
    }

    /// Constructs a UUID from a big-endian byte array of the right size.
    pub(crate) fn from_octets(octets: [u8; UUID_BYTES]) -> Self {
        Self {
            msb: bits(&octets[..8]),
            lsb: bits(&octets[8..]),
        }
    }

    /// Parses a UUID from its canonical string form.
    ///
    /// The input must be exactly 36 characters in the `8-4-4-4-12` layout
    /// with hyphens at positions 8, 13, 18 and 23. Hex digits are accepted
    /// in either case, even though formatting always emits lowercase.
    ///
    /// # Arguments
    ///
    /// * `input` - The canonical string form to parse
    ///
    /// # Returns
    ///
    /// The parsed UUID
    ///
    /// # Errors
    ///
    /// * [`UuidError::InvalidFormat`] if the input is not 36 characters
    ///   long or a hyphen is missing or misplaced
    /// * [`UuidError::InvalidCharacter`] if a digit position holds a
    ///   character outside `0-9`, `a-f` and `A-F`
    pub fn parse(input: &str) -> UuidResult<Self> {
        let chars = input.as_bytes();
        if chars.len() != UUID_STRING_LENGTH {
            return Err(UuidError::InvalidFormat(input.to_string()));
        }
        for &index in &UUID_HYPHEN_INDICES {
            if chars[index] != b'-' {
                return Err(UuidError::InvalidFormat(input.to_string()));
            }
        }
        let mut octets = [0u8; UUID_BYTES];
        for (char_range, byte_range) in UUID_CHAR_RANGES.iter().zip(&UUID_BYTE_RANGES) {
            for (offset, index) in byte_range.clone().enumerate() {
                let position = char_range.start + offset * 2;
                let high = half_byte(chars[position])
                    .ok_or_else(|| UuidError::InvalidCharacter(input.to_string()))?;
                let low = half_byte(chars[position + 1])
                    .ok_or_else(|| UuidError::InvalidCharacter(input.to_string()))?;
                octets[index] = (high << 4) | low;
            }
        }
        Ok(Self::from_octets(octets))
    }

    /// Returns the 16-byte big-endian binary form of this UUID.
    ///
    /// # Returns
    ///
    /// Byte 0 is the most significant byte of [`msb`](Uuid::msb); byte 15
    /// is the least significant byte of [`lsb`](Uuid::lsb)
    pub fn bytes(&self) -> [u8; UUID_BYTES] {
        let mut octets = [0u8; UUID_BYTES];
        octets[..8].copy_from_slice(&self.msb.to_be_bytes());
        octets[8..].copy_from_slice(&self.lsb.to_be_bytes());
        octets
    }

    /// Returns the most significant 64 bits of this UUID.
    pub const fn msb(&self) -> u64 {
        self.msb
    }

    /// Returns the least significant 64 bits of this UUID.
    pub const fn lsb(&self) -> u64 {
        self.lsb
    }

    /// Returns the version number of this UUID.
    ///
    /// The version lives in the high nibble of byte 6: 3 for name-based
    /// MD5, 4 for random, 5 for name-based SHA-1. UUIDs built from raw
    /// bits may carry any value from 0 to 15.
    ///
    /// # Returns
    ///
    /// The four version bits as a number
    pub const fn version(&self) -> u8 {
        ((self.msb >> 12) & 0x0f) as u8
    }

    /// Returns the variant number of this UUID.
    ///
    /// The variant is encoded in the top bits of byte 8: `0xx` is the
    /// reserved NCS variant (0), `10x` the RFC 4122 variant (2), `110`
    /// the Microsoft variant (6) and `111` the reserved future variant
    /// (7). Every UUID generated by this crate has variant 2.
    ///
    /// # Returns
    ///
    /// The variant number: 0, 2, 6 or 7
    pub const fn variant(&self) -> u8 {
        match (self.lsb >> 61) & 0b111 {
            0b000 | 0b001 | 0b010 | 0b011 => 0,
            0b100 | 0b101 => 2,
            0b110 => 6,
            _ => 7,
        }
    }
}

/// Folds a big-endian byte slice into a single integer.
fn bits(octets: &[u8]) -> u64 {
    octets.iter().fold(0, |half, &octet| (half << 8) | u64::from(octet))
}

/// Decodes one hex digit, accepting either case.
fn half_byte(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Overwrites the version and variant fields of a binary-form UUID,
/// per RFC 4122 section 4.1.3.
pub(crate) fn set_version(octets: &mut [u8; UUID_BYTES], version: u8) {
    octets[6] = (octets[6] & 0x0f) | ((version & 0x0f) << 4);
    octets[8] = (octets[8] & 0x3f) | 0x80;
}

/// Parses a UUID from its canonical string form.
///
/// Free-function shorthand for [`Uuid::parse`].
///
/// # Errors
///
/// See [`Uuid::parse`].
pub fn uuid_from(input: &str) -> UuidResult<Uuid> {
    Uuid::parse(input)
}

/// Constructs a UUID from its 16-byte big-endian binary form.
///
/// Free-function shorthand for [`Uuid::from_bytes`].
///
/// # Errors
///
/// See [`Uuid::from_bytes`].
pub fn uuid_of(bytes: &[u8]) -> UuidResult<Uuid> {
    Uuid::from_bytes(bytes)
}

impl fmt::Display for Uuid {
    /// Formats this UUID in its canonical string form: 36 characters,
    /// lowercase hex, hyphens at positions 8, 13, 18 and 23.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = self.bytes();
        let mut chars = [b'-'; UUID_STRING_LENGTH];
        for (char_range, byte_range) in UUID_CHAR_RANGES.iter().zip(&UUID_BYTE_RANGES) {
            for (offset, index) in byte_range.clone().enumerate() {
                let position = char_range.start + offset * 2;
                chars[position] = UUID_CHARS[(octets[index] >> 4) as usize];
                chars[position + 1] = UUID_CHARS[(octets[index] & 0x0f) as usize];
            }
        }
        // Invariant: chars holds only ASCII hex digits and hyphens
        f.write_str(std::str::from_utf8(&chars).expect("canonical UUID form is ASCII"))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl Ord for Uuid {
    /// Compares the binary forms byte by byte, treating each byte as
    /// unsigned. Sorting UUIDs this way matches sorting their canonical
    /// strings.
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes().cmp(&other.bytes())
    }
}

impl PartialOrd for Uuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
