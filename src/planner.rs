//! The planner module provides a convenient interface for planning and executing
//! a Fast Fourier Transform (FFT). The planner is responsible for pre-computing
//! the per-stage twiddle factors based on the input signal length, as well as the
//! direction of the FFT.

use num_complex::Complex;

use crate::error::FftError;
use crate::twiddles::generate_stage_roots;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Copy, Clone)]
pub enum Direction {
    /// Leave the exponent term in the twiddle factor alone
    Forward = 1,
    /// Multiply the exponent term in the twiddle factor by -1
    Reverse = -1,
}

macro_rules! impl_planner_for {
    ($struct_name:ident, $precision:ident) => {
        /// The planner is responsible for pre-computing and storing the twiddle factors for
        /// all of the `log_2(N)` stages of the FFT. Each stage needs exactly one root of
        /// unity, and the butterfly kernel derives the powers it steps through on the fly,
        /// so the table stays `log_2(N)` entries long regardless of the transform size.
        pub struct $struct_name {
            /// One primitive root of unity per butterfly stage, smallest stage first
            pub stage_roots: Vec<Complex<$precision>>,
            /// The direction of the FFT associated with this `Planner`
            pub direction: Direction,
        }

        impl $struct_name {
            /// Create a `Planner` for an FFT of size `num_points`.
            /// The twiddle factors are pre-computed based on the provided [`Direction`].
            /// For `Forward`, use [`Direction::Forward`].
            /// For `Reverse`, use [`Direction::Reverse`].
            ///
            /// # Errors
            ///
            /// Returns an error if storage for the twiddle factor table cannot be
            /// allocated.
            ///
            /// # Panics
            ///
            /// Panics if `num_points < 1` or if `num_points` is __not__ a power of 2.
            pub fn try_new(num_points: usize, direction: Direction) -> Result<Self, FftError> {
                assert!(num_points > 0 && num_points.is_power_of_two());

                let stage_roots = generate_stage_roots(num_points, direction)?;

                Ok(Self {
                    stage_roots,
                    direction,
                })
            }

            pub(crate) fn num_stages(&self) -> usize {
                self.stage_roots.len()
            }
        }
    };
}

impl_planner_for!(Planner64, f64);
impl_planner_for!(Planner32, f32);
