/// Number of rounds (and subkeys) for Simon 64/128.
pub const ROUNDS: usize = 44;

/// Number of 32-bit key words that seed the schedule.
pub const KEY_WORDS: usize = 4;

/// Round-constant bit stream z3, consumed least significant bit first.
pub const Z3: u64 = 0xfc2c_e512_07a6_35db;

/// `2^32 - 4`, xored into every derived subkey.
pub const C: u32 = 0xffff_fffc;
