//! Defines [`HexBlock`], a validated 64-bit block written as 16 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

use super::codec::{self, BLOCK_HEX_LEN};
use super::error::{Error, Result};

/// A 64-bit block as exactly 16 lowercase hex characters, most significant nibble first.
///
/// ## Examples
/// ```
/// # fn main() -> simonp::Result<()> {
/// use simonp::HexBlock;
///
/// let block = HexBlock::try_from_str("756e64206c696b65")?;
/// assert_eq!(block.as_str(), "756e64206c696b65");
/// assert_eq!(block.to_u64(), 0x756e_6420_6c69_6b65);
///
/// assert!(HexBlock::try_from_str("756E64206C696B65").is_err());
/// assert!(HexBlock::try_from_str("756e").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HexBlock {
    ascii: [u8; BLOCK_HEX_LEN],
    value: u64,
}

impl HexBlock {
    /// Validates `s` as a block. Returns an InvalidInput error if `s` is not 16 characters of `[0-9a-f]`.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let ascii = codec::validate::<BLOCK_HEX_LEN>(
            s,
            "block: expected 16 hex characters",
            "block: non-hex character",
        )?;
        let value = codec::decode_hex(s)?;
        Ok(Self { ascii, value })
    }

    /// Hex-encodes 8 raw bytes in order.
    pub fn from_bytes(bytes: &[u8; 8]) -> Self {
        codec::encode_hex(u64::from_be_bytes(*bytes))
    }

    /// Caller guarantees `ascii` is the lowercase hex encoding of `value`.
    pub(crate) fn from_parts(ascii: [u8; BLOCK_HEX_LEN], value: u64) -> Self {
        debug_assert!(ascii.iter().all(|&c| codec::nibble(c).is_some()));
        Self { ascii, value }
    }

    pub fn as_str(&self) -> &str {
        // every byte was checked to be an ASCII hex digit
        debug_assert!(self.ascii.is_ascii());
        std::str::from_utf8(&self.ascii).unwrap_or_default()
    }

    pub fn to_u64(&self) -> u64 {
        self.value
    }
}

impl FromStr for HexBlock {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for HexBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
