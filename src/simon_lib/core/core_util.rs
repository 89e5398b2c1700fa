/// Rotate right over 32 bits. `r` must be in `1..32`.
#[inline(always)]
pub(crate) fn rotate_right(x: u32, r: u32) -> u32 {
    debug_assert!(r > 0 && r < 32);
    (x >> r) | (x << (32 - r))
}

/// Rotate left over 32 bits. `r` must be in `1..32`.
#[inline(always)]
pub(crate) fn rotate_left(x: u32, r: u32) -> u32 {
    debug_assert!(r > 0 && r < 32);
    (x << r) | (x >> (32 - r))
}

/// Simon round function: `(x <<< 1 & x <<< 8) ^ x <<< 2`.
#[inline(always)]
pub(crate) fn f(x: u32) -> u32 {
    (rotate_left(x, 1) & rotate_left(x, 8)) ^ rotate_left(x, 2)
}
