#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::hex::{self, Case, ParseError};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

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

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// `timestamp` counts 100-nanosecond intervals since 1582-10-15T00:00:00Z.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit, `sequence` not a 14-bit, or `node` not a 48-bit
    /// unsigned integer.
    pub const fn from_fields_v6(timestamp: u64, sequence: u16, node: u64) -> Self {
        if timestamp >= 1 << 60 || sequence >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 52) as u8,
            (timestamp >> 44) as u8,
            (timestamp >> 36) as u8,
            (timestamp >> 28) as u8,
            (timestamp >> 20) as u8,
            (timestamp >> 12) as u8,
            0x60 | ((timestamp >> 8) & 0x0f) as u8,
            timestamp as u8,
            0x80 | (sequence >> 8) as u8,
            sequence as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Creates a UUIDv4 object by overwriting the version and variant bits of 16 random bytes.
    pub const fn from_random_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Reports the variant field value of the UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::{Uuid, Variant};
    ///
    /// assert_eq!(Uuid::NIL.variant(), Variant::Var0);
    /// assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
    /// ```
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `0b10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(x.version(), Some(6));
    /// assert_eq!(Uuid::NIL.version(), None);
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Creates an object from an ASCII hexadecimal representation.
    ///
    /// Accepts 32 case-insensitive hex digits, optionally enclosed in `{` and `}`, with any run of
    /// hyphens allowed before each pair of digits. This is the byte-oriented equivalent of
    /// [`str::parse`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::Uuid;
    ///
    /// let x = Uuid::parse_ascii(b"550e8400-e29b-41d4-a716-446655440000")?;
    /// assert_eq!(Uuid::parse_ascii(b"550E8400E29B41D4A716446655440000"), Ok(x));
    /// assert_eq!(Uuid::parse_ascii(b"{550e8400-e29b-41d4-a716-446655440000}"), Ok(x));
    /// assert!(Uuid::parse_ascii(b"550e8400-e29b-41d4-a716-44665544000").is_err());
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub fn parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        hex::decode(src).map(Self)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::{Case, Uuid};
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(&x.encode(Case::Lower) as &str, "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
    /// assert_eq!(&x.encode(Case::Upper) as &str, "1EC9414C-232A-6B00-B3C8-9F6BDECED846");
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub fn encode(&self, case: Case) -> FStr<36> {
        // SAFETY: the encoder writes ASCII bytes only
        unsafe { FStr::from_inner_unchecked(hex::encode(&self.0, case)) }
    }

    /// Returns the 32-digit hexadecimal string representation without hyphens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid6::{Case, Uuid};
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(&x.encode_simple(Case::Lower) as &str, "1ec9414c232a6b00b3c89f6bdeced846");
    /// # Ok::<(), uuid6::ParseError>(())
    /// ```
    pub fn encode_simple(&self, case: Case) -> FStr<32> {
        // SAFETY: the encoder writes ASCII bytes only
        unsafe { FStr::from_inner_unchecked(hex::encode(&self.0, case)) }
    }
}

/// The variant field of a UUID (the most significant bits of octet 8).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Variant {
    /// `0b0` - reserved for NCS backward compatibility; includes the Nil UUID.
    Var0,

    /// `0b10` - the variant this library generates.
    Var10,

    /// `0b110` - reserved for Microsoft backward compatibility.
    Var110,

    /// `0b111` - reserved for future definition; includes the Max UUID.
    VarReserved,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(Case::Lower))
    }
}

impl fmt::LowerHex for Uuid {
    /// Writes the lowercase 8-4-4-4-12 representation, or 32 digits without hyphens if the
    /// alternate flag (`{:#x}`) is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.encode_simple(Case::Lower))
        } else {
            f.write_str(&self.encode(Case::Lower))
        }
    }
}

impl fmt::UpperHex for Uuid {
    /// Writes the uppercase 8-4-4-4-12 representation, or 32 digits without hyphens if the
    /// alternate flag (`{:#X}`) is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.encode_simple(Case::Upper))
        } else {
            f.write_str(&self.encode(Case::Upper))
        }
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_ascii(src.as_bytes())
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
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

impl TryFrom<&[u8]> for Uuid {
    type Error = std::array::TryFromSliceError;

    /// Creates an object from a slice of exactly 16 bytes.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src).map(Self)
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

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Case, ParseError, Uuid};

    impl Uuid {
        /// Returns the hexadecimal string representation in the specified case, with or without
        /// the 8-4-4-4-12 hyphens.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use uuid6::{Case, Uuid};
        ///
        /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
        /// assert_eq!(x.to_string_with(Case::Upper, false), "1EC9414C232A6B00B3C89F6BDECED846");
        /// # Ok::<(), uuid6::ParseError>(())
        /// ```
        pub fn to_string_with(&self, case: Case, separators: bool) -> String {
            if separators {
                String::from(&*self.encode(case))
            } else {
                String::from(&*self.encode_simple(case))
            }
        }
    }

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
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
    use super::{fmt, Case, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode(Case::Lower))
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
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_de_tokens, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "1ec9414c-232a-6b00-b3c8-9f6bdeced846",
                    &[
                        30, 201, 65, 76, 35, 42, 107, 0, 179, 200, 159, 107, 222, 206, 216, 70,
                    ],
                ),
                (
                    "1e752a1f-3b49-658c-802a-010203040506",
                    &[30, 117, 42, 31, 59, 73, 101, 140, 128, 42, 1, 2, 3, 4, 5, 6],
                ),
                (
                    "550e8400-e29b-41d4-a716-446655440000",
                    &[
                        85, 14, 132, 0, 226, 155, 65, 212, 167, 22, 68, 102, 85, 68, 0, 0,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Deserializes relaxed string representations
        #[test]
        fn deserializes_relaxed_string_representations() {
            let e = "550e8400-e29b-41d4-a716-446655440000"
                .parse::<Uuid>()
                .unwrap();
            assert_de_tokens(
                &e.readable(),
                &[Token::Str("{550E8400E29B41D4A716446655440000}")],
            );
        }
    }
}
