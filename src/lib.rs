//! Simon 64/128 block cipher over hex strings.
//!
//! One 64-bit block, one 128-bit key, 44 rounds. Blocks are 16 lowercase hex
//! characters and keys are 32; anything else is rejected with
//! [`Error::InvalidInput`].
//!
//! ```
//! # fn main() -> simonp::Result<()> {
//! let ct = simonp::encrypt("756e64206c696b65", "0001020308090a0b1011121318191a1b")?;
//! assert_eq!(ct, "44c8fc20b9dfa07a");
//! # Ok(())
//! # }
//! ```

mod simon_lib;

pub use simon_lib::{
    Error, HexBlock, HexKey, Result, Subkeys, decode_hex, decode_hex_key_low, decrypt,
    decrypt_block, encode_hex, encrypt, encrypt_block, rearrange_bytes,
};
