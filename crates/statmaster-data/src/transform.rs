//! Whole-sample edits. Each returns a new sample and leaves the input untouched.

use rand::Rng;
use statmaster_stats::{
    analysis::{AnalysisOptions, SampleAnalysis},
    descriptive::{DescriptiveStats, VarianceKind},
    error::StatsError,
};

use crate::parser::parse_numbers;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TransformError {
    #[display("standard deviation is zero; z-scores are undefined")]
    ZeroStdDev,
    #[display("nothing to merge: no numbers found")]
    NothingToMerge,
    #[display("{_0}")]
    Stats(StatsError),
}

#[must_use]
pub fn add_constant(values: &[f64], constant: f64) -> Vec<f64> {
    values.iter().map(|x| x + constant).collect()
}

#[must_use]
pub fn multiply(values: &[f64], factor: f64) -> Vec<f64> {
    values.iter().map(|x| x * factor).collect()
}

/// Replaces each value with its z-score `(x - mean) / s`, using the mean and
/// standard deviation the descriptive engine reports for the sample.
///
/// # Errors
///
/// * [`TransformError::ZeroStdDev`] if every value is equal
/// * [`TransformError::Stats`] if the statistics cannot be computed
///
/// # Examples
///
/// ```
/// use statmaster_data::transform::standardize;
///
/// let z = standardize(&[2.0, 4.0, 6.0], None).unwrap();
/// assert_eq!(z, vec![-1.0, 0.0, 1.0]);
/// ```
pub fn standardize(
    values: &[f64],
    variance_kind: Option<VarianceKind>,
) -> Result<Vec<f64>, TransformError> {
    let stats = DescriptiveStats::from_raw(values, variance_kind).map_err(TransformError::Stats)?;
    let (mean, std_dev) = (stats.mean.value, stats.std_dev.value);
    if std_dev == 0.0 {
        return Err(TransformError::ZeroStdDev);
    }
    Ok(values.iter().map(|x| (x - mean) / std_dev).collect())
}

/// Appends the numbers found in `text` to `values`.
///
/// # Errors
///
/// [`TransformError::NothingToMerge`] if `text` contains no numbers.
pub fn merge(values: &[f64], text: &str) -> Result<Vec<f64>, TransformError> {
    let extra = parse_numbers(text);
    if extra.is_empty() {
        return Err(TransformError::NothingToMerge);
    }
    let mut merged = Vec::with_capacity(values.len() + extra.len());
    merged.extend_from_slice(values);
    merged.extend(extra);
    Ok(merged)
}

/// Adds `amount` to one value chosen uniformly at random.
///
/// An empty sample is returned unchanged.
pub fn add_noise<R: Rng + ?Sized>(rng: &mut R, values: &[f64], amount: f64) -> Vec<f64> {
    let mut noisy = values.to_vec();
    if !noisy.is_empty() {
        let idx = rng.random_range(0..noisy.len());
        tracing::debug!(idx, amount, "adding noise");
        noisy[idx] += amount;
    }
    noisy
}

/// Drops every value outside the Tukey fences of the sample.
///
/// # Errors
///
/// [`TransformError::Stats`] if the sample cannot be analyzed (fewer than 2 values).
pub fn remove_outliers(
    values: &[f64],
    options: &AnalysisOptions,
) -> Result<Vec<f64>, TransformError> {
    let analysis = SampleAnalysis::new(values, options).map_err(TransformError::Stats)?;
    Ok(values
        .iter()
        .copied()
        .filter(|&v| !analysis.fences.is_outlier(v))
        .collect())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_add_and_multiply() {
        assert_eq!(add_constant(&[1.0, 2.0], 10.0), vec![11.0, 12.0]);
        assert_eq!(multiply(&[1.0, -2.0], 2.0), vec![2.0, -4.0]);
        assert!(add_constant(&[], 1.0).is_empty());
    }

    #[test]
    fn test_standardize_has_zero_mean_unit_sd() {
        let values = [10.0, 12.0, 14.0, 15.0, 15.0, 16.0, 18.0, 20.0];
        let z = standardize(&values, None).unwrap();
        let stats = DescriptiveStats::from_raw(&z, None).unwrap();
        assert!(stats.mean.value.abs() < 1e-12);
        assert!((stats.std_dev.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standardize_errors() {
        assert_eq!(
            standardize(&[15.0; 7], None),
            Err(TransformError::ZeroStdDev)
        );
        assert_eq!(
            standardize(&[], None),
            Err(TransformError::Stats(StatsError::EmptyData))
        );
    }

    #[test]
    fn test_merge() {
        assert_eq!(merge(&[1.0], "2, 3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(merge(&[1.0], "abc"), Err(TransformError::NothingToMerge));
    }

    #[test]
    fn test_add_noise_changes_one_value() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let noisy = add_noise(&mut Pcg32::seed_from_u64(3), &values, 100.0);
        let changed = values
            .iter()
            .zip(&noisy)
            .filter(|(a, b)| a != b)
            .collect::<Vec<_>>();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1 - changed[0].0, 100.0);
        assert!(add_noise(&mut Pcg32::seed_from_u64(3), &[], 1.0).is_empty());
    }

    #[test]
    fn test_remove_outliers() {
        let values = [18.0, 19.0, 19.0, 20.0, 18.0, 2.0, 19.0, 20.0];
        let cleaned = remove_outliers(&values, &AnalysisOptions::default()).unwrap();
        assert_eq!(cleaned, vec![18.0, 19.0, 19.0, 20.0, 18.0, 19.0, 20.0]);
    }
}
