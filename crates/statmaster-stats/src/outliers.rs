//! Outlier detection with Tukey fences.
//!
//! A value is an outlier when it lies below `Q1 - k · IQR` or above
//! `Q3 + k · IQR`, with `k = 1.5` unless a different multiplier is given.

use serde::Serialize;

use crate::percentiles::Quartiles;

/// Conventional fence multiplier.
pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Lower and upper outlier bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TukeyFences {
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFences {
    /// Fences at [`TUKEY_MULTIPLIER`] interquartile ranges beyond the quartiles.
    #[must_use]
    pub fn from_quartiles(quartiles: &Quartiles) -> Self {
        Self::with_multiplier(quartiles, TUKEY_MULTIPLIER)
    }

    #[must_use]
    pub fn with_multiplier(quartiles: &Quartiles, multiplier: f64) -> Self {
        Self {
            lower: quartiles.q1 - multiplier * quartiles.iqr,
            upper: quartiles.q3 + multiplier * quartiles.iqr,
        }
    }

    /// Whether `value` lies outside the fences. The fences themselves are inside.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }

    /// Values outside the fences, in their original order.
    #[must_use]
    pub fn outliers(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .copied()
            .filter(|&v| self.is_outlier(v))
            .collect()
    }
}

/// Values of `sample` outside the standard Tukey fences of `quartiles`,
/// preserving their order of occurrence.
///
/// # Examples
///
/// ```
/// use statmaster_stats::{outliers::detect_outliers, percentiles::Quartiles};
///
/// let sample = [18.0, 19.0, 19.0, 20.0, 18.0, 2.0, 19.0, 20.0];
/// let mut sorted = sample.to_vec();
/// sorted.sort_by(f64::total_cmp);
/// let quartiles = Quartiles::from_sorted(&sorted).unwrap();
/// assert_eq!(detect_outliers(&sample, &quartiles), vec![2.0]);
/// ```
#[must_use]
pub fn detect_outliers(sample: &[f64], quartiles: &Quartiles) -> Vec<f64> {
    TukeyFences::from_quartiles(quartiles).outliers(sample)
}
