use std::{fmt, ops, str};

/// Represents a Universally Unique IDentifier.
///
/// The value is held as a plain 16-byte big-endian array; comparison and
/// hashing operate on the raw bytes, so identifiers carrying a timestamp
/// prefix sort in creation order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Byte positions of the four `-` separators in the 8-4-4-4-12 form.
const SEPARATORS: [usize; 4] = [8, 13, 18, 23];

/// Offsets of the sixteen hex byte-pairs in the 8-4-4-4-12 form.
const PAIR_OFFSETS: [usize; 16] = [
    0, 2, 4, 6, // unix_ts_ms
    9, 11, // unix_ts_ms
    14, 16, // ver + rand_a
    19, 21, // var + rand_b
    24, 26, 28, 30, 32, 34, // rand_b
];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    ///
    /// Callers that receive identifiers through a non-fallible channel can
    /// compare against this sentinel to detect uninitialized values.
    pub const NIL: Self = Self([0x00; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// This is a total function: any 16-byte value is formattable, including
    /// ones that do not carry valid version or variant bits. The output uses
    /// lowercase hex digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv7::Uuid;
    ///
    /// let x = "01890a5d-ac96-774b-bcce-b302099a8057".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "01890a5d-ac96-774b-bcce-b302099a8057");
    /// # Ok::<(), uuidv7::ParseError>(())
    /// ```
    pub fn encode(&self) -> impl ops::Deref<Target = str> + fmt::Display {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        // pre-fill with '-' so only the digit positions need writing
        let mut buffer = [b'-'; 36];
        for (i, &e) in self.0.iter().enumerate() {
            let p = PAIR_OFFSETS[i];
            buffer[p] = DIGITS[(e >> 4) as usize];
            buffer[p + 1] = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        UuidStr(buffer)
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// The input must be exactly 36 characters with `-` at positions 8, 13,
    /// 18, and 23; hex digits are accepted in either case. Unlike some
    /// permissive parsers, a non-hex character in a digit position is
    /// rejected rather than decoded as garbage.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.len() != 36 {
            return Err(ParseError::Length { actual: src.len() });
        }
        let src = src.as_bytes();
        for position in SEPARATORS {
            if src[position] != b'-' {
                return Err(ParseError::Separator { position });
            }
        }

        let mut dst = [0u8; 16];
        for (e, &p) in dst.iter_mut().zip(PAIR_OFFSETS.iter()) {
            let hi = decode_digit(src[p]).ok_or(ParseError::Digit { position: p })?;
            let lo = decode_digit(src[p + 1]).ok_or(ParseError::Digit { position: p + 1 })?;
            *e = (hi << 4) | lo;
        }
        Ok(Self(dst))
    }
}

/// Decodes one case-insensitive hex digit.
const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
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

/// Concrete return type of [`Uuid::encode()`] containing the stack-allocated
/// 8-4-4-4-12 string representation.
struct UuidStr([u8; 36]);

impl ops::Deref for UuidStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.0.is_ascii());
        unsafe { str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for UuidStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Error parsing an invalid string representation of UUID.
///
/// Each variant pins down the first violation encountered so that callers can
/// produce an actionable diagnostic.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// The input was not exactly 36 characters long.
    Length {
        /// Length of the rejected input.
        actual: usize,
    },
    /// A `-` separator was missing at one of the four fixed positions.
    Separator {
        /// First separator position holding a non-`-` character.
        position: usize,
    },
    /// A digit position held a character outside `[0-9a-fA-F]`.
    Digit {
        /// First digit position holding a non-hex character.
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Length { actual } => {
                write!(f, "invalid UUID length: {} (expected 36)", actual)
            }
            Self::Separator { position } => {
                write!(f, "invalid UUID format: expected '-' at position {}", position)
            }
            Self::Digit { position } => {
                write!(f, "invalid UUID format: bad hex digit at position {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(feature = "uuid")]
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
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl<'de> de::Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "01890a5d-ac96-774b-bcce-b302099a8057",
                    &[
                        1, 137, 10, 93, 172, 150, 119, 75, 188, 206, 179, 2, 9, 154, 128, 87,
                    ],
                ),
                (
                    "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
                    &[
                        1, 127, 34, 226, 121, 176, 124, 195, 152, 196, 220, 12, 12, 7, 57, 143,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
