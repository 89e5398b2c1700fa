use crate::simon_lib::block::HexBlock;
use crate::simon_lib::codec::encode_hex;
use crate::simon_lib::core;
use crate::simon_lib::error::Result;
use crate::simon_lib::key::HexKey;
use crate::simon_lib::schedule::Subkeys;

/// Encrypts a 16-hex-character plaintext with a 32-hex-character key.
///
/// Returns an [InvalidInput](crate::Error::InvalidInput) error if either string has the
/// wrong length or a character outside `[0-9a-f]`.
///
/// ## Examples
/// ```
/// # fn main() -> simonp::Result<()> {
/// let key = "0001020308090a0b1011121318191a1b";
///
/// let ciphertext = simonp::encrypt("756e64206c696b65", key)?;
/// assert_eq!(ciphertext, "44c8fc20b9dfa07a");
///
/// let plaintext = simonp::decrypt(&ciphertext, key)?;
/// assert_eq!(plaintext, "756e64206c696b65");
/// # Ok(())
/// # }
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let block = HexBlock::try_from_str(plaintext)?;
    let key = HexKey::try_from_str(key)?;
    Ok(encrypt_block(&block, &key).to_string())
}

/// Decrypts a 16-hex-character ciphertext with a 32-hex-character key.
///
/// Inverse of [encrypt]: `decrypt(&encrypt(p, k)?, k)? == p` for every valid `p` and `k`.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let block = HexBlock::try_from_str(ciphertext)?;
    let key = HexKey::try_from_str(key)?;
    Ok(decrypt_block(&block, &key).to_string())
}

/// Encrypts an already validated block. Cannot fail.
pub fn encrypt_block(plaintext: &HexBlock, key: &HexKey) -> HexBlock {
    let subkeys = Subkeys::expand(key);
    encode_hex(core::encrypt_block(plaintext.to_u64(), subkeys.as_array()))
}

/// Decrypts an already validated block. Cannot fail.
pub fn decrypt_block(ciphertext: &HexBlock, key: &HexKey) -> HexBlock {
    let subkeys = Subkeys::expand(key);
    encode_hex(core::decrypt_block(ciphertext.to_u64(), subkeys.as_array()))
}
