//! Serde integration for [`Uuid`].
//!
//! Only available with the `serde` feature (enabled by default).
//!
//! Three wire forms are supported:
//!
//! - **Default**: the canonical lowercase string, used by the plain
//!   `Serialize` impl.
//! - [`uppercase`]: the canonical string in uppercase.
//! - [`binary`]: the 16 binary bytes as standard base64 text.
//!
//! Every deserialisation path accepts all three forms. The forms cannot
//! collide: a canonical string is 36 characters while base64 of 16 bytes
//! is 24, so the input length picks the decoder. This lets a producer
//! migrate between forms without coordinating with its readers.
//!
//! The alternate forms are selected per field with `#[serde(with)]`:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use uuid128::Uuid;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     id: Uuid,
//!     #[serde(with = "uuid128::serde_support::binary")]
//!     parent: Uuid,
//! }
//!
//! let record = Record {
//!     id: Uuid::parse("550e8400-e29b-41d4-a716-446655440000")?,
//!     parent: Uuid::parse("550e8400-e29b-41d4-a716-446655440000")?,
//! };
//! let json = serde_json::to_string(&record)?;
//! assert!(json.contains("550e8400-e29b-41d4-a716-446655440000"));
//! assert!(json.contains("VQ6EAOKbQdSnFkRmVUQAAA=="));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::uuid::UUID_STRING_LENGTH;
use crate::{Uuid, UuidError, UuidResult};

/// Decodes a UUID from any of the supported wire forms.
///
/// Input of canonical length is parsed as a canonical string; anything
/// else is treated as base64-encoded binary.
fn decode_any(text: &str) -> UuidResult<Uuid> {
    if text.len() == UUID_STRING_LENGTH {
        return Uuid::parse(text);
    }
    let decoded = general_purpose::STANDARD
        .decode(text)
        .map_err(|_| UuidError::InvalidFormat(text.to_string()))?;
    Uuid::from_bytes(&decoded)
}

impl Serialize for Uuid {
    /// Serialises as the canonical lowercase string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    /// Deserialises from a string in any supported wire form: canonical
    /// in either case, or base64-encoded binary.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        decode_any(&text).map_err(serde::de::Error::custom)
    }
}

/// Canonical string form in uppercase, for `#[serde(with)]`.
///
/// Deserialisation remains tolerant of all supported wire forms.
pub mod uppercase {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::Uuid;

    /// Serialises `uuid` as its canonical string in uppercase.
    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&uuid.to_string().to_ascii_uppercase())
    }

    /// Deserialises a UUID from any supported wire form.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer)
    }
}

/// Binary form as standard base64 text, for `#[serde(with)]`.
///
/// The binary form is always carried as base64 text, so it works with
/// text-only formats such as JSON. Deserialisation remains tolerant of
/// all supported wire forms.
pub mod binary {
    use base64::{engine::general_purpose, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::Uuid;

    /// Serialises `uuid` as base64 of its 16-byte binary form.
    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&general_purpose::STANDARD.encode(uuid.bytes()))
    }

    /// Deserialises a UUID from any supported wire form.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer)
    }
}
