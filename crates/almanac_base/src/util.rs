//! Shared modular arithmetic for the cyclic resolvers.

/// Reduce `x` into `[0, n)`, also for negative `x`.
///
/// `n` must be positive.
pub const fn normalize_mod(x: i64, n: i64) -> i64 {
    ((x % n) + n) % n
}

/// [`normalize_mod`] narrowed to a table index.
pub(crate) const fn cyclic_index(x: i64, n: i64) -> usize {
    normalize_mod(x, n) as usize
}
