//! Error type returned by the fallible FFT entry points.

/// Errors the transform entry points can return.
///
/// Violations of the API contract, such as a buffer length that is not a
/// power of 2, panic instead of being reported here.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Storage for the per-stage twiddle factor table could not be reserved.
    TwiddleAllocation {
        /// Number of table entries, one per butterfly stage, that were
        /// requested from the allocator.
        stages: usize,
    },
}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwiddleAllocation { stages } => {
                write!(f, "failed to allocate the {stages} entry twiddle factor table")
            }
        }
    }
}

impl std::fmt::Debug for FftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}
