//! Butterfly kernels.
//!
//! Each stage pairs every element in the lower half of a chunk with its
//! partner `chunk_size / 2` positions above it and recombines the two through
//! one complex multiply-add.

use num_complex::Complex;
use num_traits::{Float, One};

/// Butterfly for `chunk_size == 2`.
///
/// The only twiddle factor involved is `W_2^0 = 1`, so the stage reduces to a
/// pairwise sum and difference.
#[inline]
pub(crate) fn fft_chunk_2<T: Float>(signal: &mut [Complex<T>]) {
    signal.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// Butterfly for `chunk_size >= 4`, stepping through the powers of the stage
/// root `omega`.
///
/// The rotating factor starts at `omega^0 = 1` and picks up one factor of
/// `omega` per butterfly. It depends only on the position inside the chunk,
/// never on the chunk itself, so every chunk of the stage walks the same
/// sequence of powers.
#[inline]
pub(crate) fn fft_chunk_n<T: Float>(
    signal: &mut [Complex<T>],
    omega: Complex<T>,
    chunk_size: usize,
) {
    let dist = chunk_size >> 1;

    signal.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (c_s0, c_s1) = chunk.split_at_mut(dist);

        // Complex<Complex<T>> is a Num too, so the scalar-Mul impl leaves
        // plain Complex::one() ambiguous here
        let mut w = Complex::<T>::one();
        c_s0.iter_mut().zip(c_s1.iter_mut()).for_each(|(z0, z1)| {
            let product = w * *z1;
            *z1 = *z0 - product;
            *z0 = *z0 + product;
            w = w * omega;
        });
    });
}
