pub extern crate rustfft;

use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffer, normalized so
/// that the total energy of the signal is 1
pub fn gen_random_signal<T>(signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }

    let energy = signal
        .iter()
        .map(|z| z.norm_sqr())
        .fold(T::zero(), |acc, e| acc + e);

    let scale = energy.sqrt().recip();
    for z in signal.iter_mut() {
        *z = z.scale(scale);
    }
}
