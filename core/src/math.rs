//! Miscellaneous math functions

/// Returns `index + offset` wrapped into the range `0..len`.
///
/// Both directions use explicit modular arithmetic, so `wrap_offset(0, -1,
/// len)` is `len - 1` and `wrap_offset(len - 1, 1, len)` is `0`. Offsets
/// larger than `len` in either direction wrap as many times as needed.
///
/// Panics if `len` is zero.
pub fn wrap_offset(index: usize, offset: isize, len: usize) -> usize {
    assert!(len > 0, "Cannot wrap an index into an empty range");
    let len_i = len as isize;
    let index = (index % len) as isize;
    (index + offset.rem_euclid(len_i)).rem_euclid(len_i) as usize
}

/// Returns the index before `index` in a cyclic range of length `len`.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Returns the index after `index` in a cyclic range of length `len`.
pub fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}
