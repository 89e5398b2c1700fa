//! Defines the [`HexKey`] struct, which holds a validated 128-bit key written as 32 hex characters.
//! Keys can be randomly generated, parsed from a hex string, or built from raw bytes.

use std::fmt;
use std::str::FromStr;

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::codec::{self, BLOCK_HEX_LEN, KEY_HEX_LEN};
use super::error::{Error, Result};

/// Contains a valid Simon 64/128 key. The first 16 characters are the high 64-bit half,
/// the last 16 the low half.
///
/// ## Examples
/// ```
/// # fn main() -> simonp::Result<()> {
/// use simonp::HexKey;
///
/// let key = HexKey::try_from_str("0001020308090a0b1011121318191a1b")?;
/// assert_eq!(key.high(), 0x0001_0203_0809_0a0b);
/// assert_eq!(key.low(), 0x1011_1213_1819_1a1b);
///
/// let bytes: [u8; 16] = [0x00, 0x01, 0x02, 0x03, 0x08, 0x09, 0x0a, 0x0b,
///                        0x10, 0x11, 0x12, 0x13, 0x18, 0x19, 0x1a, 0x1b];
/// assert_eq!(HexKey::from_bytes(&bytes), key);
///
/// // random keys are always well formed
/// let rk = HexKey::random()?;
/// assert_eq!(rk.as_str().len(), 32);
///
/// // anything other than 32 lowercase hex characters is rejected
/// assert!(HexKey::try_from_str("0001020308090a0b").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HexKey {
    ascii: [u8; KEY_HEX_LEN],
    high: u64,
    low: u64,
}

impl HexKey {
    /// Validates `s` as a key. Returns an InvalidInput error if `s` is not 32 characters of `[0-9a-f]`.
    pub fn try_from_str(s: &str) -> Result<Self> {
        let ascii = codec::validate::<KEY_HEX_LEN>(
            s,
            "key: expected 32 hex characters",
            "key: non-hex character",
        )?;
        // ascii-only from here, so slicing on byte offsets is safe
        let high = codec::decode_hex(&s[..BLOCK_HEX_LEN])?;
        let low = codec::decode_hex_key_low(s)?;
        Ok(Self { ascii, high, low })
    }

    /// Hex-encodes 16 raw bytes in order.
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let value = u128::from_be_bytes(*bytes);
        let high = (value >> 64) as u64;
        let low = value as u64;

        let mut ascii = [0u8; KEY_HEX_LEN];
        ascii[..BLOCK_HEX_LEN].copy_from_slice(codec::encode_hex(high).as_str().as_bytes());
        ascii[BLOCK_HEX_LEN..].copy_from_slice(codec::encode_hex(low).as_str().as_bytes());
        Self { ascii, high, low }
    }

    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self::from_bytes(&k))
    }

    pub fn as_str(&self) -> &str {
        // every byte was checked to be an ASCII hex digit
        debug_assert!(self.ascii.is_ascii());
        std::str::from_utf8(&self.ascii).unwrap_or_default()
    }

    /// First 16 hex characters as an integer.
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Last 16 hex characters as an integer.
    pub fn low(&self) -> u64 {
        self.low
    }
}

impl FromStr for HexKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
