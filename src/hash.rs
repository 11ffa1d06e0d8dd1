//! Name-based UUIDs (versions 3 and 5)

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::Uuid;

impl Uuid {
    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 DNs in DER or text format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);
}

/// Generates a UUIDv3 object from the MD5 hash of `namespace` and `name`.
///
/// The result is deterministic. Prefer [`uuid5`] unless compatibility requires MD5.
///
/// # Examples
///
/// ```rust
/// use uuid9562::{uuid3, Uuid};
///
/// let uuid = uuid3(Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    let digest = Md5::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name.as_ref())
        .finalize();
    from_digest(&digest, 3)
}

/// Generates a UUIDv5 object from the SHA-1 hash of `namespace` and `name`.
///
/// The result is deterministic.
///
/// # Examples
///
/// ```rust
/// use uuid9562::{uuid5, Uuid};
///
/// let uuid = uuid5(Uuid::NAMESPACE_DNS, "www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Uuid {
    let digest = Sha1::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name.as_ref())
        .finalize();
    from_digest(&digest, 5)
}

/// Takes the leading 16 bytes of `digest` and stamps `version` and the RFC variant.
fn from_digest(digest: &[u8], version: u8) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from(bytes).stamped(version)
}
