pub mod constants;
mod core_util;
mod decryption;
mod encryption;

pub(crate) use core_util::rotate_right;
pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
