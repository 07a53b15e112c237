//! Hexadecimal text codec for the 16-byte layout.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Letter case of the hexadecimal digits in a textual representation.
///
/// Parsing is always case-insensitive; this only affects output.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Case {
    /// `0-9` and `a-f` (the canonical form).
    #[default]
    Lower,

    /// `0-9` and `A-F`.
    Upper,
}

impl Case {
    const fn digits(self) -> &'static [u8; 16] {
        match self {
            Self::Lower => b"0123456789abcdef",
            Self::Upper => b"0123456789ABCDEF",
        }
    }
}

/// Marker for non-hex bytes in [`DECODE_TABLE`].
const INVALID: u8 = 0xff;

/// Maps every byte value to its hex digit value, or [`INVALID`].
const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

/// Writes the 32 hex digits of `src` into an `N`-byte buffer, inserting hyphens at the 8-4-4-4-12
/// boundaries when `N` is 36.
pub(crate) fn encode<const N: usize>(src: &[u8; 16], case: Case) -> [u8; N] {
    debug_assert!(N == 32 || N == 36);
    let digits = case.digits();
    let separators = N == 36;

    let mut buffer = [0u8; N];
    let mut i = 0;
    for (j, e) in src.iter().enumerate() {
        if separators && matches!(j, 4 | 6 | 8 | 10) {
            buffer[i] = b'-';
            i += 1;
        }
        buffer[i] = digits[(e >> 4) as usize];
        buffer[i + 1] = digits[(e & 15) as usize];
        i += 2;
    }
    debug_assert_eq!(i, N);
    debug_assert!(buffer.is_ascii());
    buffer
}

/// Reads 16 bytes from a hexadecimal representation.
///
/// The input may be enclosed in a pair of curly braces, and any run of hyphens may precede each
/// pair of hex digits. Nothing may follow the last pair.
pub(crate) fn decode(src: &[u8]) -> Result<[u8; 16], ParseError> {
    const ERR: ParseError = ParseError {};

    let src = match src {
        [b'{', inner @ .., b'}'] => inner,
        [b'{', ..] => return Err(ERR),
        _ => src,
    };

    let mut dst = [0u8; 16];
    let mut iter = src.iter().copied().peekable();
    for e in dst.iter_mut() {
        while iter.next_if_eq(&b'-').is_some() {}
        let hi = decode_digit(iter.next().ok_or(ERR)?).ok_or(ERR)?;
        let lo = decode_digit(iter.next().ok_or(ERR)?).ok_or(ERR)?;
        *e = (hi << 4) | lo;
    }

    if iter.next().is_none() {
        Ok(dst)
    } else {
        Err(ERR)
    }
}

const fn decode_digit(c: u8) -> Option<u8> {
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        n => Some(n),
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for ParseError {}
