//! In-place bit-reversal permutation.
//!
//! A decimation-in-time FFT consumes its input in bit-reversed index order and
//! produces output in natural order, so the transform starts by reordering the
//! buffer with this permutation.

use crate::bits::{bit_length, bit_reverse};

/// Reorders `buf` so that the element at index `i` ends up at the index whose
/// binary representation is `i` reversed.
///
/// Index 0 and index `N - 1` are palindromes and stay put; every other pair is
/// swapped exactly once, so applying the permutation twice restores the
/// original order. The buffer length must be a power of 2.
pub(crate) fn bit_reverse_permutation<T>(buf: &mut [T]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    if n < 4 {
        return;
    }
    let bits = bit_length(n) - 1;

    for i in 1..n - 1 {
        let rev = bit_reverse(i, bits);
        if i < rev {
            buf.swap(i, rev);
        }
    }
}
