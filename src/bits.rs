//! Bit manipulation helpers shared by the permutation stage and the planner.

/// Number of bits needed to represent `x`, i.e. the position of its highest
/// set bit, plus one. Returns 0 for 0.
pub(crate) fn bit_length(x: usize) -> u32 {
    usize::BITS - x.leading_zeros()
}

/// Reverses the lowest `bits` bits of `x` and discards everything above them.
///
/// For any `x < 2^bits`, applying this twice yields `x` back.
pub(crate) fn bit_reverse(x: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    x.reverse_bits() >> (usize::BITS - bits)
}
