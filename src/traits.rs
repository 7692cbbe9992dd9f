//! Core traits and the error type shared by every calculator
//!
//! Input elements implement [`Sample`], which promotes them to `f64` before any
//! arithmetic happens. Slices get the [`MeanStdDevExt`] extension methods.

use num_traits::AsPrimitive;

use crate::statistics::{self, Estimator, MeanAndStandardDeviation};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Input too short for the requested estimator
///
/// The population estimator needs at least one value, the Bessel-corrected
/// sample estimator at least two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientInputError {
    /// Minimum number of values the estimator needs
    pub required: usize,
    /// Number of values actually supplied
    pub found: usize,
}

impl core::fmt::Display for InsufficientInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "insufficient input: expected at least {} values, found {}",
            self.required, self.found
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InsufficientInputError {}

/// A numeric value that can be fed to the calculators
///
/// Implemented for every primitive integer and float type. The conversion is
/// an `as` cast, so `i64`/`u64` values beyond 2^53 lose precision the same way
/// they would in any `f64` arithmetic.
pub trait Sample: Copy {
    /// Promote to double precision
    fn to_f64(self) -> f64;
}

impl<T> Sample for T
where
    T: AsPrimitive<f64>,
{
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }
}

/// Mean and standard deviation as slice methods
///
/// ```
/// use meanstd::traits::MeanStdDevExt;
///
/// let summary = [2, 4, 4, 4, 5, 5, 7, 9].mean_and_standard_deviation(false).unwrap();
/// assert_eq!(summary.mean(), 5.0);
/// assert_eq!(summary.standard_deviation(), 2.0);
/// ```
pub trait MeanStdDevExt {
    /// Compute with Bessel's correction when `unbiased` is true
    fn mean_and_standard_deviation(
        &self,
        unbiased: bool,
    ) -> Result<MeanAndStandardDeviation, InsufficientInputError> {
        self.mean_and_standard_deviation_with(Estimator::from_unbiased(unbiased), None)
    }

    /// Compute with an explicit estimator, optionally reusing `scratch`
    fn mean_and_standard_deviation_with(
        &self,
        estimator: Estimator,
        scratch: Option<&mut Vec<f64>>,
    ) -> Result<MeanAndStandardDeviation, InsufficientInputError>;
}

impl<T: Sample> MeanStdDevExt for [T] {
    fn mean_and_standard_deviation_with(
        &self,
        estimator: Estimator,
        scratch: Option<&mut Vec<f64>>,
    ) -> Result<MeanAndStandardDeviation, InsufficientInputError> {
        statistics::calculate_with(self, estimator, scratch)
    }
}
