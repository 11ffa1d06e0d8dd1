use std::fmt;

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
///
/// The value is a 16-byte big-endian array laid out as described in RFC 9562. The derived
/// ordering is the lexicographic byte order, which is also the order of the canonical string
/// representation.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The variant field of a UUID, i.e., the layout family the value belongs to.
///
/// The discriminants are the three most significant bits of octet 8 with the don't-care bits
/// cleared.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Variant {
    /// `0xx`: reserved for NCS backward compatibility.
    Ncs = 0,
    /// `10x`: the layout specified by RFC 4122 and RFC 9562.
    Rfc4122 = 4,
    /// `110`: reserved for Microsoft backward compatibility.
    Microsoft = 6,
    /// `111`: reserved for future definition.
    Future = 7,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the version field (the high nibble of octet 6).
    ///
    /// Identifiers generated by this crate report 1 through 7. Parsed values may carry any
    /// nibble, as no version validation is performed.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the variant field (the high bits of octet 8).
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100 | 0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Overwrites the version nibble, leaving the low nibble of octet 6 intact.
    pub(crate) fn set_version(&mut self, version: u8) {
        debug_assert!(version < 16);
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
    }

    /// Overwrites the two variant bits with `10`, leaving the low six bits of octet 8 intact.
    pub(crate) fn set_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
    }

    /// Stamps the version and the RFC variant, consuming a freshly assembled layout.
    pub(crate) fn stamped(mut self, version: u8) -> Self {
        self.set_version(version);
        self.set_variant();
        self
    }

    /// Creates a UUIDv1 from a 60-bit count of 100-nanosecond ticks since 1582-10-15, a 14-bit
    /// clock sequence, and a 48-bit node id.
    ///
    /// The timestamp is split low-order first: the least significant 32 bits make `time_low`,
    /// the next 16 bits `time_mid`, and the top 12 bits `time_high`. Each field is stored
    /// big-endian.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` is out of its field range.
    pub fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        assert!(
            timestamp < 1 << 60 && clock_seq < 1 << 14,
            "invalid field value"
        );

        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&(timestamp as u32).to_be_bytes());
        bytes[4..6].copy_from_slice(&((timestamp >> 32) as u16).to_be_bytes());
        bytes[6..8].copy_from_slice(&((timestamp >> 48) as u16).to_be_bytes());
        bytes[8..10].copy_from_slice(&clock_seq.to_be_bytes());
        bytes[10..].copy_from_slice(&node);
        Self(bytes).stamped(1)
    }

    /// Creates a UUIDv6 from a 60-bit count of 100-nanosecond ticks since 1582-10-15, a 14-bit
    /// clock sequence, and a 48-bit node id.
    ///
    /// Unlike UUIDv1, the timestamp is laid out most significant bits first so that the byte
    /// order follows the generation time.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` or `clock_seq` is out of its field range.
    pub fn from_fields_v6(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        assert!(
            timestamp < 1 << 60 && clock_seq < 1 << 14,
            "invalid field value"
        );

        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&((timestamp >> 28) as u32).to_be_bytes());
        bytes[4..6].copy_from_slice(&((timestamp >> 12) as u16).to_be_bytes());
        bytes[6..8].copy_from_slice(&((timestamp & 0xfff) as u16).to_be_bytes());
        bytes[8..10].copy_from_slice(&clock_seq.to_be_bytes());
        bytes[10..].copy_from_slice(&node);
        Self(bytes).stamped(6)
    }

    /// Creates a UUIDv7 from a 48-bit Unix timestamp in milliseconds, the 12-bit `rand_a`
    /// field (used as the sequence counter by the generator), and the 62-bit `rand_b` field.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of its field range.
    pub fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        assert!(
            unix_ts_ms < 1 << 48 && rand_a < 1 << 12 && rand_b < 1 << 62,
            "invalid field value"
        );

        let mut bytes = [0u8; 16];
        bytes[0..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
        bytes[6..8].copy_from_slice(&rand_a.to_be_bytes());
        bytes[8..].copy_from_slice(&rand_b.to_be_bytes());
        Self(bytes).stamped(7)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid9562::Uuid;
    ///
    /// let x = "01809424-3E59-7C05-9219-566F82FFF672".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), uuid9562::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                buffer[j] = b'-';
                j += 1;
            }
            write_hex_pair(&mut buffer[j..j + 2], *e);
            j += 2;
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation without separators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid9562::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS;
    /// assert_eq!(&x.encode_compact() as &str, "6ba7b8109dad11d180b400c04fd430c8");
    /// ```
    pub fn encode_compact(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (dst, e) in buffer.chunks_exact_mut(2).zip(self.0.iter()) {
            write_hex_pair(dst, *e);
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

fn write_hex_pair(dst: &mut [u8], byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    dst[0] = DIGITS[(byte >> 4) as usize];
    dst[1] = DIGITS[(byte & 15) as usize];
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    const NODE: [u8; 6] = [0x9f, 0x6b, 0xde, 0xce, 0xd8, 0x46];

    /// Returns a collection of prepared UUIDv7 cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT12: u16 = (1 << 12) - 1;
        const MAX_UINT62: u64 = (1 << 62) - 1;

        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT12, 0), "00000000-0000-7fff-8000-000000000000"),
            ((0, 0, MAX_UINT62), "00000000-0000-7000-bfff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes prepared UUIDv7 cases correctly
    #[test]
    fn encodes_prepared_v7_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(&e.encode() as &str, *text);
            assert_eq!(&e.to_string(), text);
            assert_eq!(&e.encode_compact() as &str, text.replace('-', ""));
            assert_eq!(e.version(), 7);
            assert_eq!(e.variant(), Variant::Rfc4122);
        }
    }

    /// Lays out RFC 9562 UUIDv1 test vector
    #[test]
    fn lays_out_rfc_9562_v1_test_vector() {
        let e = Uuid::from_fields_v1(0x1ec9414c232ab00, 0x33c8, NODE);
        assert_eq!(&e.encode() as &str, "c232ab00-9414-11ec-b3c8-9f6bdeced846");
        assert_eq!(e.version(), 1);
        assert_eq!(e.variant(), Variant::Rfc4122);
    }

    /// Lays out RFC 9562 UUIDv6 test vector
    #[test]
    fn lays_out_rfc_9562_v6_test_vector() {
        let e = Uuid::from_fields_v6(0x1ec9414c232ab00, 0x33c8, NODE);
        assert_eq!(&e.encode() as &str, "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
        assert_eq!(e.version(), 6);
        assert_eq!(e.variant(), Variant::Rfc4122);
    }

    /// Orders UUIDv6 by timestamp unlike UUIDv1
    #[test]
    fn orders_v6_by_timestamp_unlike_v1() {
        let (early, late) = (0x1ec9414c232ab00, 0x1ec9415c232aaff);
        assert!(Uuid::from_fields_v6(early, 0, NODE) < Uuid::from_fields_v6(late, 0, NODE));
        assert!(Uuid::from_fields_v1(early, 0, NODE) > Uuid::from_fields_v1(late, 0, NODE));
    }

    /// Rejects out-of-range field values
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn rejects_out_of_range_field_values() {
        Uuid::from_fields_v6(0, 1 << 14, NODE);
    }

    /// Classifies variant bits of foreign values
    #[test]
    fn classifies_variant_bits_of_foreign_values() {
        let cases = [
            (0x00, Variant::Ncs),
            (0x7f, Variant::Ncs),
            (0x80, Variant::Rfc4122),
            (0xbf, Variant::Rfc4122),
            (0xc0, Variant::Microsoft),
            (0xdf, Variant::Microsoft),
            (0xe0, Variant::Future),
            (0xff, Variant::Future),
        ];
        for (octet, variant) in cases {
            let mut bytes = [0u8; 16];
            bytes[8] = octet;
            assert_eq!(Uuid::from(bytes).variant(), variant);
        }
        assert_eq!(Variant::Rfc4122 as u8, 4);
        assert_eq!(Variant::Microsoft as u8, 6);
    }

    /// Stamps version and variant without touching other bits
    #[test]
    fn stamps_version_and_variant_without_touching_other_bits() {
        let mut e = Uuid::MAX;
        e.set_version(3);
        e.set_variant();
        assert_eq!(&e.encode() as &str, "ffffffff-ffff-3fff-bfff-ffffffffffff");

        let mut e = Uuid::NIL;
        e.set_version(5);
        e.set_variant();
        assert_eq!(&e.encode() as &str, "00000000-0000-5000-8000-000000000000");
        assert_eq!(e.version(), 5);
    }

    /// Hands out copies of raw bytes
    #[test]
    fn hands_out_copies_of_raw_bytes() {
        let e = Uuid::from_fields_v7(0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f);
        let mut raw = e.to_bytes();
        raw.fill(0);
        assert_ne!(Uuid::from(raw), e);
        assert_eq!(&e.encode() as &str, "017f22e2-79b0-7cc3-98c4-dc0c0c07398f");
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(e.to_bytes()), e);
            assert_eq!(e.as_ref(), &e.to_bytes()[..]);
        }
    }
}
