#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use num_complex::Complex;

use crate::kernels::{fft_chunk_2, fft_chunk_n};
use crate::permute::bit_reverse_permutation;
use crate::planner::{Direction, Planner32, Planner64};

mod bits;
mod error;
mod kernels;
mod permute;
pub mod planner;
mod twiddles;

pub use error::FftError;
pub use num_complex;

macro_rules! impl_fft_with_planner_for {
    ($func_name:ident, $precision:ty, $planner:ty) => {
        /// In-place FFT over `signal`, using the twiddle factors and direction stored in
        /// `planner`.
        ///
        /// The input is taken in natural order, permuted into bit-reversed order, and the
        /// result is produced in natural order. A planner built with `Reverse` runs the
        /// inverse transform and scales the output by `1 / N`.
        ///
        /// This entry point never allocates, so repeated transforms over same-length
        /// buffers can share one planner.
        ///
        /// # Panics
        ///
        /// Panics if `signal.len() < 1`, if `signal.len()` is __not__ a power of 2, or if
        /// `planner` was built for a different number of points.
        pub fn $func_name(signal: &mut [Complex<$precision>], planner: &$planner) {
            let n = signal.len();
            assert!(n > 0 && n.is_power_of_two());
            let log_n = n.ilog2() as usize;
            assert_eq!(log_n, planner.num_stages());

            bit_reverse_permutation(signal);

            for (stage, omega) in planner.stage_roots.iter().enumerate() {
                let chunk_size = 2usize << stage;

                if chunk_size == 2 {
                    fft_chunk_2(signal);
                } else {
                    fft_chunk_n(signal, *omega, chunk_size);
                }
            }

            if let Direction::Reverse = planner.direction {
                let scale = (n as $precision).recip();
                for z in signal.iter_mut() {
                    *z *= scale;
                }
            }
        }
    };
}

impl_fft_with_planner_for!(fft_64_with_planner, f64, Planner64);
impl_fft_with_planner_for!(fft_32_with_planner, f32, Planner32);

macro_rules! impl_fft_for {
    ($func_name:ident, $precision:ty, $planner:ty, $fft_with_planner:ident) => {
        /// FFT over `signal`, run in place in the direction given by `direction`.
        ///
        /// The input is taken in natural order and the result is produced in natural
        /// order. [`Direction::Reverse`] runs the inverse transform and scales the output
        /// by `1 / N`, so a forward transform followed by a reverse transform returns the
        /// original signal.
        ///
        /// The twiddle factor table for `signal.len()` points is built on entry and
        /// dropped again before returning. Repeated transforms over same-length buffers
        /// are better served by building a planner once and calling the `*_with_planner`
        /// variant.
        ///
        /// # Errors
        ///
        /// Returns an error and leaves `signal` untouched if storage for the twiddle
        /// factor table cannot be allocated.
        ///
        /// # Panics
        ///
        /// Panics if `signal.len() < 1` or if `signal.len()` is __not__ a power of 2.
        ///
        /// ## References
        /// J. W. Cooley and J. W. Tukey, "An algorithm for the machine calculation of
        /// complex Fourier series," Mathematics of Computation, vol. 19, no. 90,
        /// pp. 297-301, 1965.
        pub fn $func_name(
            signal: &mut [Complex<$precision>],
            direction: Direction,
        ) -> Result<(), FftError> {
            let planner = <$planner>::try_new(signal.len(), direction)?;
            $fft_with_planner(signal, &planner);
            Ok(())
        }
    };
}

impl_fft_for!(fft_64, f64, Planner64, fft_64_with_planner);
impl_fft_for!(fft_32, f32, Planner32, fft_32_with_planner);
