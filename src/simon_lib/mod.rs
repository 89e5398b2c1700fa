mod block;
mod cipher;
mod codec;
mod core;
mod error;
mod key;
mod schedule;

pub use block::HexBlock;
pub use cipher::{decrypt, decrypt_block, encrypt, encrypt_block};
pub use codec::{decode_hex, decode_hex_key_low, encode_hex, rearrange_bytes};
pub use error::{Error, Result};
pub use key::HexKey;
pub use schedule::Subkeys;
