//! Mean and standard deviation of a finite sample
//!
//! The calculation is a plain two-pass algorithm over a slice: one pass for
//! the mean, one for the squared deviations. Input elements of any primitive
//! numeric type are promoted to `f64` first.
//!
//! # Example
//!
//! ```
//! use meanstd::statistics::{calculate_mean_and_standard_deviation, StdDevCalculator};
//!
//! let summary = calculate_mean_and_standard_deviation(&[1u32, 2, 3, 4, 5], true, None).unwrap();
//! println!("Mean: {}", summary.mean());
//! println!("Stddev: {}", summary.standard_deviation());
//!
//! // Reuse one buffer across many samples
//! let mut calc = StdDevCalculator::new();
//! for sample in [[1.0, 2.0], [3.0, 5.0]] {
//!     println!("{}", calc.calculate(&sample).unwrap());
//! }
//! ```

mod deviation;
mod summary;

pub use deviation::{calculate_mean_and_standard_deviation, calculate_with, StdDevCalculator};
pub use summary::{Estimator, MeanAndStandardDeviation};
