//! Result pair and estimator selection

/// Which variance estimator to use
///
/// [`Estimator::Sample`] applies Bessel's correction (divides by `n - 1`) and is
/// the default. [`Estimator::Population`] divides by `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Estimator {
    /// Divide the squared deviations by `n`
    Population,
    /// Divide the squared deviations by `n - 1`
    #[default]
    Sample,
}

impl Estimator {
    /// Map the `unbiased` flag to an estimator
    pub fn from_unbiased(unbiased: bool) -> Self {
        if unbiased {
            Estimator::Sample
        } else {
            Estimator::Population
        }
    }

    /// Whether Bessel's correction is applied
    pub fn is_unbiased(self) -> bool {
        matches!(self, Estimator::Sample)
    }

    /// Amount subtracted from `n` in the variance denominator
    pub fn correction(self) -> usize {
        match self {
            Estimator::Population => 0,
            Estimator::Sample => 1,
        }
    }

    /// Smallest input length this estimator accepts
    pub fn min_len(self) -> usize {
        1 + self.correction()
    }
}

/// Mean and standard deviation of a sample
///
/// Produced by the calculators in this module. Fields are read-only.
///
/// ```
/// use meanstd::statistics::calculate_mean_and_standard_deviation;
///
/// let summary = calculate_mean_and_standard_deviation(&[1.0, 2.0, 3.0], true, None).unwrap();
/// assert_eq!(summary.mean(), 2.0);
/// assert_eq!(summary.standard_deviation(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanAndStandardDeviation {
    mean: f64,
    standard_deviation: f64,
}

impl MeanAndStandardDeviation {
    pub(crate) fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation under the estimator that produced this result
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Variance (square of the standard deviation)
    pub fn variance(&self) -> f64 {
        self.standard_deviation * self.standard_deviation
    }
}

impl core::fmt::Display for MeanAndStandardDeviation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ± {}", self.mean, self.standard_deviation)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MeanAndStandardDeviation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("MeanAndStandardDeviation", 2)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("standard_deviation", &self.standard_deviation)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimator_default_is_sample() {
        assert_eq!(Estimator::default(), Estimator::Sample);
        assert!(Estimator::default().is_unbiased());
    }

    #[test]
    fn test_estimator_flag_mapping() {
        assert_eq!(Estimator::from_unbiased(true), Estimator::Sample);
        assert_eq!(Estimator::from_unbiased(false), Estimator::Population);
        assert!(!Estimator::Population.is_unbiased());
    }

    #[test]
    fn test_min_len() {
        assert_eq!(Estimator::Population.correction(), 0);
        assert_eq!(Estimator::Population.min_len(), 1);
        assert_eq!(Estimator::Sample.correction(), 1);
        assert_eq!(Estimator::Sample.min_len(), 2);
    }

    #[test]
    fn test_summary_accessors() {
        let summary = MeanAndStandardDeviation::new(5.0, 2.0);
        assert_eq!(summary.mean(), 5.0);
        assert_eq!(summary.standard_deviation(), 2.0);
        assert_eq!(summary.variance(), 4.0);
        assert_eq!(summary.to_string(), "5 ± 2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let summary = MeanAndStandardDeviation::new(5.0, 2.0);
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"mean":5.0,"standard_deviation":2.0}"#);
    }
}
