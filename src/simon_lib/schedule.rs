//! Simon 64/128 key schedule.

use log::debug;

use super::codec::rearrange_bytes;
use super::core::constants::{C, KEY_WORDS, ROUNDS, Z3};
use super::core::rotate_right;
use super::key::HexKey;

/// The 44 round subkeys for one key, in round order.
///
/// Regenerated for every [`encrypt`](crate::encrypt)/[`decrypt`](crate::decrypt) call;
/// never cached across calls.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Subkeys([u32; ROUNDS]);

impl Subkeys {
    /// Runs the key schedule.
    ///
    /// Subkeys 0..4 are the four 32-bit words of the key (high half first), each
    /// byte-reversed. Each later subkey mixes the four previous ones with `C` and
    /// one bit of `Z3`.
    pub fn expand(key: &HexKey) -> Self {
        let (high, low) = (key.high(), key.low());

        let mut k = [0u32; ROUNDS];
        k[0] = rearrange_bytes((high >> 32) as u32);
        k[1] = rearrange_bytes(high as u32);
        k[2] = rearrange_bytes((low >> 32) as u32);
        k[3] = rearrange_bytes(low as u32);

        let mut z = Z3;
        for i in KEY_WORDS..ROUNDS {
            k[i] = C
                ^ (z & 1) as u32
                ^ k[i - 4]
                ^ rotate_right(k[i - 1], 3)
                ^ k[i - 3]
                ^ rotate_right(k[i - 1], 4)
                ^ rotate_right(k[i - 3], 1);
            z >>= 1;
        }

        debug!("expanded key schedule: {} subkeys, last={:08x}", ROUNDS, k[ROUNDS - 1]);
        Self(k)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub(crate) fn as_array(&self) -> &[u32; ROUNDS] {
        &self.0
    }

    /// Subkey for round `i`, or `None` past the last round.
    pub fn get(&self, i: usize) -> Option<u32> {
        self.0.get(i).copied()
    }

    pub fn len(&self) -> usize {
        ROUNDS
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simon_lib::error::Result;

    #[test]
    fn key_schedule_reference() -> Result<()> {
        let key = HexKey::try_from_str("0001020308090a0b1011121318191a1b")?;
        let subkeys = Subkeys::expand(&key);

        assert_eq!(subkeys.len(), 44);
        assert_eq!(
            &subkeys.as_slice()[..8],
            &[
                0x0302_0100, 0x0b0a_0908, 0x1312_1110, 0x1b1a_1918,
                0x70a0_11c3, 0xb770_ec49, 0x57e3_e835, 0xd397_bc42,
            ]
        );
        assert_eq!(subkeys.get(42), Some(0x0c1c_f793));
        assert_eq!(subkeys.get(43), Some(0x15df_4696));
        assert_eq!(subkeys.get(44), None);
        Ok(())
    }

    #[test]
    fn zero_key_schedule() -> Result<()> {
        let key = HexKey::try_from_str(&"0".repeat(32))?;
        let subkeys = Subkeys::expand(&key);

        // with a zero key the first derived words are just C ^ z-bit ^ rotations of C
        assert_eq!(&subkeys.as_slice()[..6], &[0, 0, 0, 0, 0xffff_fffd, 0x9fff_fffd]);
        Ok(())
    }

    #[test]
    fn schedule_is_deterministic() -> Result<()> {
        let key = HexKey::try_from_str("00112233445566778899aabbccddeeff")?;
        assert_eq!(Subkeys::expand(&key), Subkeys::expand(&key));
        Ok(())
    }
}
