//! Twiddle factor generation.
//!
//! A radix-2 decimation-in-time FFT multiplies by the powers of exactly one
//! root of unity per stage: the stage that merges chunks of size `n` steps
//! through the powers of the primitive `n`-th root `e^(-2*pi*i/n)`. The table
//! built here stores that one root per stage and leaves raising it to the
//! per-butterfly powers to the kernel, so the whole table is `log_2(N)`
//! entries no matter how large the transform is.

use num_complex::Complex;
use num_traits::Float;

use crate::bits::bit_length;
use crate::error::FftError;
use crate::planner::Direction;

/// Reserves storage for `stages` roots of unity, reporting failure instead of
/// aborting the process.
pub(crate) fn alloc_roots<T>(stages: usize) -> Result<Vec<Complex<T>>, FftError> {
    let mut roots = Vec::new();
    roots
        .try_reserve_exact(stages)
        .map_err(|_| FftError::TwiddleAllocation { stages })?;
    Ok(roots)
}

/// Generates the per-stage roots of unity for an FFT over `num_points` points.
///
/// Entry `s` holds the primitive `2^(s + 1)`-th root of unity, i.e. the root
/// for the stage that merges chunks of size `2^(s + 1)`: the table starts at
/// -1 (stage size 2), then -i (stage size 4), and every further entry is the
/// principal square root of the one before it. For [`Direction::Reverse`] each
/// entry is conjugated, which flips the sign of its exponent.
///
/// # Errors
///
/// Returns an error if storage for the table cannot be reserved; nothing else
/// in here can fail.
pub(crate) fn generate_stage_roots<T: Float>(
    num_points: usize,
    direction: Direction,
) -> Result<Vec<Complex<T>>, FftError> {
    debug_assert!(num_points.is_power_of_two());

    let num_stages = (bit_length(num_points) - 1) as usize;
    let mut roots = alloc_roots::<T>(num_stages)?;

    if num_stages >= 1 {
        roots.push(Complex::new(-T::one(), T::zero()));
    }
    // The principal square root of -1 is +i, so the quarter turn has to be
    // seeded by hand to stay on the negative-exponent convention. From there
    // on every argument has a negative imaginary part and the principal root
    // keeps the sign.
    if num_stages >= 2 {
        let mut root = Complex::new(T::zero(), -T::one());
        roots.push(root);

        for _ in 2..num_stages {
            root = root.sqrt();
            roots.push(root);
        }
    }

    if let Direction::Reverse = direction {
        for root in roots.iter_mut() {
            *root = root.conj();
        }
    }

    Ok(roots)
}
