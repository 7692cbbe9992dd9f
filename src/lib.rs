//! # Meanstd
//!
//! Mean and standard deviation for Rust slices.
//!
//! Computes the arithmetic mean and the population or Bessel-corrected sample
//! standard deviation of any slice of primitive numbers, accumulating in `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use meanstd::prelude::*;
//!
//! let latencies_ms = [12u32, 15, 11, 14, 13];
//! let summary = calculate_mean_and_standard_deviation(&latencies_ms, true, None).unwrap();
//! println!("Latency: {} ms", summary);
//!
//! // Or as a slice method
//! let summary = latencies_ms.mean_and_standard_deviation(false).unwrap();
//! assert_eq!(summary.mean(), 13.0);
//! ```
//!
//! ## Errors
//!
//! The only failure is an input too short for the estimator: the sample
//! estimator needs two values, the population estimator one. See
//! [`InsufficientInputError`](traits::InsufficientInputError).
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is `no_std` + `alloc`
//! - `serde`: Serialize results
//! - `tracing`: Emit a `trace` event per computed result

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;
pub mod statistics;
pub mod traits;

pub mod prelude {
    pub use crate::statistics::{
        calculate_mean_and_standard_deviation, calculate_with, Estimator,
        MeanAndStandardDeviation, StdDevCalculator,
    };
    pub use crate::traits::*;
}

pub use statistics::{calculate_mean_and_standard_deviation, MeanAndStandardDeviation};
pub use traits::InsufficientInputError;
