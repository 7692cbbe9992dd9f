//! Two-pass mean and standard deviation
//!
//! The first pass sums the values to get the mean. The second pass stores each
//! value's deviation from the mean in a scratch buffer and sums their squares.
//! All accumulation is done in `f64`, left to right, starting from `0.0`.

use super::summary::{Estimator, MeanAndStandardDeviation};
use crate::math;
use crate::traits::{InsufficientInputError, Sample};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Compute the mean and standard deviation of `values`
///
/// With `unbiased` set, Bessel's correction is applied and at least two values
/// are required. Otherwise a single value is enough (and yields a deviation
/// of exactly `0.0`).
///
/// `scratch` may be passed to reuse its allocation across calls. Its contents
/// on entry are ignored and on exit are unspecified. When the input is too
/// short the buffer is not touched.
///
/// # Example
///
/// ```
/// use meanstd::statistics::calculate_mean_and_standard_deviation;
///
/// let data = [2, 4, 4, 4, 5, 5, 7, 9];
/// let mut scratch = Vec::new();
///
/// let population = calculate_mean_and_standard_deviation(&data, false, Some(&mut scratch)).unwrap();
/// assert_eq!(population.mean(), 5.0);
/// assert_eq!(population.standard_deviation(), 2.0);
///
/// assert!(calculate_mean_and_standard_deviation(&[5], true, None).is_err());
/// ```
pub fn calculate_mean_and_standard_deviation<T: Sample>(
    values: &[T],
    unbiased: bool,
    scratch: Option<&mut Vec<f64>>,
) -> Result<MeanAndStandardDeviation, InsufficientInputError> {
    calculate_with(values, Estimator::from_unbiased(unbiased), scratch)
}

/// Same as [`calculate_mean_and_standard_deviation`] with an explicit [`Estimator`]
pub fn calculate_with<T: Sample>(
    values: &[T],
    estimator: Estimator,
    scratch: Option<&mut Vec<f64>>,
) -> Result<MeanAndStandardDeviation, InsufficientInputError> {
    let n = values.len();
    let required = estimator.min_len();
    if n < required {
        return Err(InsufficientInputError { required, found: n });
    }

    let mut owned = Vec::new();
    let deviations = match scratch {
        Some(buf) => buf,
        None => &mut owned,
    };

    let mean = values.iter().fold(0.0_f64, |acc, &x| acc + x.to_f64()) / n as f64;

    deviations.clear();
    deviations.extend(values.iter().map(|&x| x.to_f64() - mean));

    let squared_sum = deviations.iter().fold(0.0_f64, |acc, &d| acc + d * d);
    let standard_deviation = math::sqrt(squared_sum / (n - estimator.correction()) as f64);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        len = n,
        unbiased = estimator.is_unbiased(),
        mean,
        standard_deviation,
        "computed mean and standard deviation"
    );

    Ok(MeanAndStandardDeviation::new(mean, standard_deviation))
}

/// Calculator that keeps its scratch buffer between calls
///
/// Useful when summarising many samples in a loop: the deviation buffer grows
/// to the largest input seen and is then reused.
///
/// ```
/// use meanstd::statistics::{Estimator, StdDevCalculator};
///
/// let mut calc = StdDevCalculator::with_estimator(Estimator::Population);
///
/// for window in [[1.0, 1.0, 1.0], [2.0, 4.0, 6.0]] {
///     let summary = calc.calculate(&window).unwrap();
///     assert!(summary.standard_deviation() >= 0.0);
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct StdDevCalculator {
    estimator: Estimator,
    scratch: Vec<f64>,
}

impl StdDevCalculator {
    /// Create a calculator using the Bessel-corrected estimator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator using `estimator`
    pub fn with_estimator(estimator: Estimator) -> Self {
        Self {
            estimator,
            scratch: Vec::new(),
        }
    }

    /// Configured estimator
    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    /// Compute the mean and standard deviation of `values`
    pub fn calculate<T: Sample>(
        &mut self,
        values: &[T],
    ) -> Result<MeanAndStandardDeviation, InsufficientInputError> {
        calculate_with(values, self.estimator, Some(&mut self.scratch))
    }
}
