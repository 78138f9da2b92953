//! Name-based (version 3 and version 5) UUID derivation.
//!
//! A name-based UUID is a pure function of a namespace UUID and a name:
//! the same inputs always derive the same UUID, across processes and
//! platforms. The digest algorithm comes in through the [`UuidHasher`]
//! trait; [`Md5Hasher`] yields version 3 and [`Sha1Hasher`] version 5.
//! RFC 4122 recommends version 5 for new designs.

use md5::{Digest, Md5};
use sha1::Sha1;

use crate::uuid::{set_version, Uuid, UUID_BYTES};

/// A single-use digest for deriving name-based UUIDs.
///
/// A hasher accumulates input through [`update`](UuidHasher::update) and
/// is consumed by [`digest`](UuidHasher::digest), so one instance derives
/// exactly one UUID. Digests shorter than 16 bytes are zero-padded;
/// longer ones are truncated.
pub trait UuidHasher {
    /// Returns the version number stamped into UUIDs derived with this
    /// hasher.
    fn version(&self) -> u8;

    /// Feeds a chunk of input into the hash state.
    fn update(&mut self, input: &[u8]);

    /// Consumes the hasher and returns the digest bytes.
    fn digest(self) -> Vec<u8>;
}

/// MD5 hasher backing version 3 UUIDs.
#[derive(Debug)]
pub struct Md5Hasher {
    state: Md5,
}

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5Hasher {
    /// Creates a fresh hasher with an empty hash state.
    pub fn new() -> Self {
        Self { state: Md5::new() }
    }
}

impl UuidHasher for Md5Hasher {
    fn version(&self) -> u8 {
        3
    }

    fn update(&mut self, input: &[u8]) {
        self.state.update(input);
    }

    fn digest(self) -> Vec<u8> {
        self.state.finalize().to_vec()
    }
}

/// SHA-1 hasher backing version 5 UUIDs.
#[derive(Debug)]
pub struct Sha1Hasher {
    state: Sha1,
}

impl Default for Sha1Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1Hasher {
    /// Creates a fresh hasher with an empty hash state.
    pub fn new() -> Self {
        Self { state: Sha1::new() }
    }
}

impl UuidHasher for Sha1Hasher {
    fn version(&self) -> u8 {
        5
    }

    fn update(&mut self, input: &[u8]) {
        self.state.update(input);
    }

    fn digest(self) -> Vec<u8> {
        self.state.finalize().to_vec()
    }
}

/// Derives a name-based UUID with the given hasher.
///
/// Hashes the namespace's binary form followed by the UTF-8 bytes of the
/// name, takes the first 16 digest bytes (zero-padding if the digest is
/// shorter), then overwrites the version and variant fields per RFC 4122
/// section 4.3.
///
/// # Arguments
///
/// * `namespace` - The UUID naming the space the name belongs to
/// * `name` - The name to derive from; hashed as UTF-8
/// * `hasher` - The digest to derive with, consumed by the call
///
/// # Returns
///
/// A UUID carrying the hasher's version and the RFC 4122 variant,
/// identical for identical inputs
pub fn name_based_uuid_of(namespace: &Uuid, name: &str, mut hasher: impl UuidHasher) -> Uuid {
    let version = hasher.version();
    hasher.update(&namespace.bytes());
    hasher.update(name.as_bytes());
    let digest = hasher.digest();

    let mut octets = [0u8; UUID_BYTES];
    let length = digest.len().min(UUID_BYTES);
    octets[..length].copy_from_slice(&digest[..length]);
    set_version(&mut octets, version);
    Uuid::from_octets(octets)
}

/// Derives a version 3 (MD5 name-based) UUID.
///
/// # Arguments
///
/// * `namespace` - The UUID naming the space the name belongs to
/// * `name` - The name to derive from
///
/// # Returns
///
/// The version 3 UUID for the namespace and name
pub fn uuid3_of(namespace: &Uuid, name: &str) -> Uuid {
    name_based_uuid_of(namespace, name, Md5Hasher::new())
}

/// Derives a version 5 (SHA-1 name-based) UUID.
///
/// # Arguments
///
/// * `namespace` - The UUID naming the space the name belongs to
/// * `name` - The name to derive from
///
/// # Returns
///
/// The version 5 UUID for the namespace and name
pub fn uuid5_of(namespace: &Uuid, name: &str) -> Uuid {
    name_based_uuid_of(namespace, name, Sha1Hasher::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Known version 5 values, cross-checked against other implementations.
    const SHA1_VECTORS: [(Uuid, &str, &str); 6] = [
        (Uuid::NAMESPACE_DNS, "www.example.com", "2ed6657d-e927-568b-95e1-2665a8aea6a2"),
        (Uuid::NAMESPACE_DNS, "example.com", "cfbff0d1-9375-5685-968c-48ce8b15ae17"),
        (Uuid::NAMESPACE_DNS, "", "4ebd0208-8328-5d69-8c44-ec50939c0967"),
        (Uuid::NAMESPACE_URL, "https://example.com/", "dd2c1780-811a-5296-81c5-178a0ef488bc"),
        (Uuid::NAMESPACE_OID, "1.3.6.1", "1447fa61-5277-5fef-a9b3-fbc6e44f4af3"),
        (
            Uuid::NAMESPACE_X500,
            "cn=Jane Doe, o=Example, c=GB",
            "af57e0d5-022b-59de-a333-012decba915e",
        ),
    ];

    /// Known version 3 values, cross-checked against other implementations.
    const MD5_VECTORS: [(Uuid, &str, &str); 5] = [
        (Uuid::NAMESPACE_DNS, "www.example.com", "5df41881-3aed-3515-88a7-2f4a814cf09e"),
        (Uuid::NAMESPACE_DNS, "example.com", "9073926b-929f-31c2-abc9-fad77ae3e8eb"),
        (Uuid::NAMESPACE_DNS, "www.widgets.com", "3d813cbb-47fb-32ba-91df-831e1593ac29"),
        (Uuid::NAMESPACE_OID, "1.3.6.1", "dd1a1cef-13d5-368a-ad82-eca71acd4cd1"),
        (Uuid::NAMESPACE_DNS, "", "c87ee674-4ddc-3efe-a74e-dfe25da5d7b3"),
    ];

    #[test]
    fn test_uuid5_known_values() {
        for (namespace, name, expected) in SHA1_VECTORS {
            assert_eq!(
                uuid5_of(&namespace, name).to_string(),
                expected,
                "uuid5({}, {:?})",
                namespace,
                name
            );
        }
    }

    #[test]
    fn test_uuid3_known_values() {
        for (namespace, name, expected) in MD5_VECTORS {
            assert_eq!(
                uuid3_of(&namespace, name).to_string(),
                expected,
                "uuid3({}, {:?})",
                namespace,
                name
            );
        }
    }

    #[test]
    fn test_uuid5_version_and_variant() {
        let uuid = uuid5_of(&Uuid::NAMESPACE_DNS, "www.example.com");

        assert_eq!(uuid.version(), 5);
        assert_eq!(uuid.variant(), 2);
    }

    #[test]
    fn test_uuid3_version_and_variant() {
        let uuid = uuid3_of(&Uuid::NAMESPACE_DNS, "www.example.com");

        assert_eq!(uuid.version(), 3);
        assert_eq!(uuid.variant(), 2);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = uuid5_of(&Uuid::NAMESPACE_URL, "https://example.com/page");
        let second = uuid5_of(&Uuid::NAMESPACE_URL, "https://example.com/page");

        assert_eq!(first, second);
    }

    #[test]
    fn test_uuid3_and_uuid5_differ_for_same_inputs() {
        let md5 = uuid3_of(&Uuid::NAMESPACE_DNS, "example.com");
        let sha1 = uuid5_of(&Uuid::NAMESPACE_DNS, "example.com");

        assert_ne!(md5, sha1);
    }

    #[test]
    fn test_namespace_changes_result() {
        let dns = uuid5_of(&Uuid::NAMESPACE_DNS, "example.com");
        let url = uuid5_of(&Uuid::NAMESPACE_URL, "example.com");

        assert_ne!(dns, url);
    }

    #[test]
    fn test_name_changes_result() {
        let first = uuid5_of(&Uuid::NAMESPACE_DNS, "example.com");
        let second = uuid5_of(&Uuid::NAMESPACE_DNS, "example.org");

        assert_ne!(first, second);
    }

    #[test]
    fn test_name_is_hashed_as_utf8() {
        assert_eq!(
            uuid5_of(&Uuid::NAMESPACE_DNS, "日本語").to_string(),
            "9786f370-913c-51ea-845e-7f3469bc5966"
        );
        assert_eq!(
            uuid3_of(&Uuid::NAMESPACE_DNS, "日本語").to_string(),
            "f9e3b804-0a0d-3dd0-a874-0baf0cb21aab"
        );
    }

    #[test]
    fn test_long_name() {
        let name = "a".repeat(10_000);
        let uuid = uuid5_of(&Uuid::NAMESPACE_DNS, &name);

        assert_eq!(uuid.version(), 5);
        assert_eq!(uuid.variant(), 2);
        assert_eq!(uuid, uuid5_of(&Uuid::NAMESPACE_DNS, &name));
    }

    /// Fake hasher with a digest shorter than a UUID.
    struct ShortHasher;

    impl UuidHasher for ShortHasher {
        fn version(&self) -> u8 {
            9
        }

        fn update(&mut self, _input: &[u8]) {}

        fn digest(self) -> Vec<u8> {
            vec![0xaa; 4]
        }
    }

    #[test]
    fn test_short_digest_is_zero_padded() {
        let uuid = name_based_uuid_of(&Uuid::NAMESPACE_DNS, "ignored", ShortHasher);

        assert_eq!(uuid.to_string(), "aaaaaaaa-0000-9000-8000-000000000000");
        assert_eq!(uuid.version(), 9);
    }

    /// Fake hasher with a digest twice the size of a UUID.
    struct WideHasher;

    impl UuidHasher for WideHasher {
        fn version(&self) -> u8 {
            15
        }

        fn update(&mut self, _input: &[u8]) {}

        fn digest(self) -> Vec<u8> {
            let mut digest = vec![0x11; 16];
            digest.extend_from_slice(&[0xff; 16]);
            digest
        }
    }

    #[test]
    fn test_wide_digest_is_truncated() {
        let uuid = name_based_uuid_of(&Uuid::NAMESPACE_DNS, "ignored", WideHasher);

        // Bytes past the sixteenth never reach the UUID
        assert_eq!(uuid.to_string(), "11111111-1111-f111-9111-111111111111");
    }
}
