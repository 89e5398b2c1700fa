use log::trace;

use super::constants::ROUNDS;
use super::core_util::f;
use crate::simon_lib::codec::rearrange_bytes;

/// Encrypts one 64-bit block with 44 subkeys.
///
/// The input is read in byte order: the high half becomes `right` and the low half
/// `left`, each byte-reversed. The output is packed in word order, `left || right`.
#[inline(always)]
pub fn encrypt_block(plaintext: u64, subkeys: &[u32; ROUNDS]) -> u64 {
    let mut right = rearrange_bytes((plaintext >> 32) as u32);
    let mut left = rearrange_bytes(plaintext as u32);

    for (i, &k) in subkeys.iter().enumerate() {
        let new_left = right ^ f(left) ^ k;
        right = left;
        left = new_left;
        trace!("encrypt round {i}: left={left:08x} right={right:08x}");
    }

    ((left as u64) << 32) | right as u64
}
