//! Conversions between fixed-length lowercase hex strings and integers.
//!
//! Decoding is big-endian by nibble: the first character is the most significant
//! 4 bits. Only `[0-9a-f]` is accepted.

use super::block::HexBlock;
use super::error::{Error, Result};

/// Hex characters in a 64-bit block.
pub(crate) const BLOCK_HEX_LEN: usize = 16;
/// Hex characters in a 128-bit key.
pub(crate) const KEY_HEX_LEN: usize = 32;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decodes a 16-character hex string into a `u64`.
pub fn decode_hex(s: &str) -> Result<u64> {
    if s.len() != BLOCK_HEX_LEN {
        return Err(Error::InvalidInput {
            len: s.len(),
            context: "block: expected 16 hex characters",
        });
    }
    decode_nibbles(s.as_bytes(), "block: non-hex character")
}

/// Decodes the low half (characters 16..32) of a 32-character hex key.
pub fn decode_hex_key_low(s: &str) -> Result<u64> {
    if s.len() != KEY_HEX_LEN {
        return Err(Error::InvalidInput {
            len: s.len(),
            context: "key: expected 32 hex characters",
        });
    }
    decode_nibbles(&s.as_bytes()[BLOCK_HEX_LEN..], "key: non-hex character")
}

/// Formats `v` as 16 lowercase hex characters, zero padded, no prefix.
pub fn encode_hex(v: u64) -> HexBlock {
    let mut out = [0u8; BLOCK_HEX_LEN];
    for (i, c) in out.iter_mut().enumerate() {
        let shift = 60 - 4 * i;
        *c = HEX_DIGITS[((v >> shift) & 0xf) as usize];
    }
    HexBlock::from_parts(out, v)
}

/// Reverses the byte order of a 32-bit word.
#[inline(always)]
pub fn rearrange_bytes(v: u32) -> u32 {
    v.swap_bytes()
}

/// Accumulates up to 16 hex digits into a `u64`, starting from zero.
pub(crate) fn decode_nibbles(digits: &[u8], context: &'static str) -> Result<u64> {
    let mut acc: u64 = 0;
    for &d in digits {
        let nibble = nibble(d).ok_or(Error::InvalidInput {
            len: digits.len(),
            context,
        })?;
        acc = (acc << 4) | nibble as u64;
    }
    Ok(acc)
}

#[inline(always)]
pub(crate) fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Checks length and character set, copying into a fixed-size array.
pub(crate) fn validate<const N: usize>(
    s: &str,
    len_context: &'static str,
    char_context: &'static str,
) -> Result<[u8; N]> {
    let bytes: [u8; N] = s.as_bytes().try_into().map_err(|_| Error::InvalidInput {
        len: s.len(),
        context: len_context,
    })?;
    if bytes.iter().any(|&c| nibble(c).is_none()) {
        return Err(Error::InvalidInput {
            len: s.len(),
            context: char_context,
        });
    }
    Ok(bytes)
}
