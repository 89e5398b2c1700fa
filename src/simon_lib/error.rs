use rand::rand_core;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Input string had the wrong length or contained a character outside `[0-9a-f]`.
    #[error("invalid input: {len} characters ({context})")]
    InvalidInput { len: usize, context: &'static str },

    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}

impl Error {
    /// True for caller-input failures (length or character set).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}
