use log::trace;

use super::constants::ROUNDS;
use super::core_util::f;
use crate::simon_lib::codec::rearrange_bytes;

/// Decrypts one 64-bit block with 44 subkeys, running the rounds in reverse.
///
/// The input is read in word order (`left || right`, no byte reversal), the
/// layout produced by [`encrypt_block`](super::encrypt_block). The output is repacked in
/// byte order so that decryption exactly inverts encryption.
#[inline(always)]
pub fn decrypt_block(ciphertext: u64, subkeys: &[u32; ROUNDS]) -> u64 {
    let mut right = ciphertext as u32;
    let mut left = (ciphertext >> 32) as u32;

    for (i, &k) in subkeys.iter().enumerate().rev() {
        let new_right = left ^ f(right) ^ k;
        left = right;
        right = new_right;
        trace!("decrypt round {i}: left={left:08x} right={right:08x}");
    }

    ((rearrange_bytes(right) as u64) << 32) | rearrange_bytes(left) as u64
}
