use serde::Serialize;

use crate::error::StatsError;

/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use statmaster_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(50.0), Some(5.5));
/// assert_eq!(percentiles.get(25.0), Some(3.25));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Errors
    ///
    /// See [`percentile`].
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
    ) -> Result<Self, StatsError> {
        let values = percentile_points
            .iter()
            .map(|&p| percentile(sorted_values, p).map(|value| (p, value)))
            .collect::<Result<_, _>>()?;
        Ok(Self { values })
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// First and third quartiles and their distance.
///
/// The median (second quartile) is reported by
/// [`DescriptiveStats`](crate::descriptive::DescriptiveStats).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
}

impl Quartiles {
    /// Computes quartiles of ascending values by linear interpolation.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyData`] if `sorted_values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmaster_stats::percentiles::Quartiles;
    /// let q = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
    /// assert_eq!(q.q1, 2.75);
    /// assert_eq!(q.q3, 6.25);
    /// assert_eq!(q.iqr, 3.5);
    /// ```
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        if sorted_values.is_empty() {
            return Err(StatsError::EmptyData);
        }
        let q1 = interpolate(sorted_values, 0.25);
        let q3 = interpolate(sorted_values, 0.75);
        Ok(Self {
            q1,
            q3,
            iqr: q3 - q1,
        })
    }
}

/// Value at percentile `p` (0 to 100) of ascending values.
///
/// Uses linear interpolation between the two nearest ranks at position
/// `p / 100 · (n - 1)`; `p = 0` and `p = 100` return the minimum and maximum.
///
/// # Errors
///
/// * [`StatsError::EmptyData`] if `sorted_values` is empty
/// * [`StatsError::InvalidArgument`] if `p` is outside `[0, 100]`
///
/// # Examples
///
/// ```
/// use statmaster_stats::percentiles::percentile;
///
/// let values = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile(&values, 0.0).unwrap(), 10.0);
/// assert_eq!(percentile(&values, 50.0).unwrap(), 25.0);
/// assert_eq!(percentile(&values, 100.0).unwrap(), 40.0);
/// ```
pub fn percentile(sorted_values: &[f64], p: f64) -> Result<f64, StatsError> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::invalid(format!(
            "percentile {p} is outside 0..=100"
        )));
    }
    let (Some(&first), Some(&last)) = (sorted_values.first(), sorted_values.last()) else {
        return Err(StatsError::EmptyData);
    };
    Ok(if p == 0.0 {
        first
    } else if p == 100.0 {
        last
    } else {
        interpolate(sorted_values, p / 100.0)
    })
}

/// Percentile rank of `value` in ascending values, splitting ties evenly:
/// `(below + 0.5 · equal) / n · 100`.
///
/// # Errors
///
/// [`StatsError::EmptyData`] if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// use statmaster_stats::percentiles::percentile_rank;
///
/// let values = [1.0, 2.0, 2.0, 3.0];
/// assert_eq!(percentile_rank(&values, 2.0).unwrap(), 50.0);
/// assert_eq!(percentile_rank(&values, 0.0).unwrap(), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn percentile_rank(sorted_values: &[f64], value: f64) -> Result<f64, StatsError> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    if sorted_values.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let below = sorted_values.partition_point(|&x| x < value);
    let below_or_equal = sorted_values.partition_point(|&x| x <= value);
    let equal = below_or_equal - below;
    Ok((below as f64 + 0.5 * equal as f64) / sorted_values.len() as f64 * 100.0)
}

/// Percentage of values inside the closed range `[low, high]`.
///
/// # Errors
///
/// [`StatsError::EmptyData`] if `sorted_values` is empty.
#[expect(clippy::cast_precision_loss)]
pub fn share_in_range(sorted_values: &[f64], low: f64, high: f64) -> Result<f64, StatsError> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    if sorted_values.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let start = sorted_values.partition_point(|&x| x < low);
    let end = sorted_values.partition_point(|&x| x <= high);
    let inside = end.saturating_sub(start);
    Ok(inside as f64 / sorted_values.len() as f64 * 100.0)
}

/// Linear interpolation at `fraction · (n - 1)`; `sorted_values` must be non-empty.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn interpolate(sorted_values: &[f64], fraction: f64) -> f64 {
    let position = fraction * (sorted_values.len() - 1) as f64;
    let base = position.floor() as usize;
    let rest = position - position.floor();
    match sorted_values.get(base + 1) {
        Some(&next) if rest > 0.0 => {
            let value = sorted_values[base];
            value + rest * (next - value)
        }
        _ => sorted_values[base],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolated_quartiles() {
        let q = Quartiles::from_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(q.q1, 2.0);
        assert_eq!(q.q3, 4.0);
        assert_eq!(q.iqr, 2.0);
    }

    #[test]
    fn test_single_value_quartiles() {
        let q = Quartiles::from_sorted(&[7.0]).unwrap();
        assert_eq!(q.q1, 7.0);
        assert_eq!(q.q3, 7.0);
        assert_eq!(q.iqr, 0.0);
    }

    #[test]
    fn test_empty_quartiles() {
        assert_eq!(Quartiles::from_sorted(&[]).unwrap_err(), StatsError::EmptyData);
    }

    #[test]
    fn test_percentile_interpolation() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert!((percentile(&values, 90.0).unwrap() - 9.1).abs() < 1e-12);
        assert_eq!(percentile(&values, 50.0).unwrap(), 5.5);
    }

    #[test]
    fn test_percentile_out_of_range() {
        let values = [1.0, 2.0];
        assert!(matches!(
            percentile(&values, -1.0),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            percentile(&values, 100.5),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            percentile(&values, f64::NAN),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert_eq!(percentile(&[], 50.0).unwrap_err(), StatsError::EmptyData);
    }

    #[test]
    fn test_percentile_rank() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile_rank(&values, 3.0).unwrap(), 50.0);
        assert_eq!(percentile_rank(&values, 6.0).unwrap(), 100.0);
        assert_eq!(percentile_rank(&values, 2.5).unwrap(), 40.0);
        assert_eq!(percentile_rank(&[], 1.0).unwrap_err(), StatsError::EmptyData);
    }

    #[test]
    fn test_share_in_range() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(share_in_range(&values, 2.0, 3.0).unwrap(), 50.0);
        assert_eq!(share_in_range(&values, 0.0, 10.0).unwrap(), 100.0);
        assert_eq!(share_in_range(&values, 3.0, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_precomputed_lookup() {
        let percentiles = Percentiles::new(&[5.0, 1.0, 3.0], &[0.0, 50.0, 100.0]).unwrap();
        assert_eq!(percentiles.as_slice(), &[(0.0, 1.0), (50.0, 3.0), (100.0, 5.0)]);
        assert_eq!(percentiles.get(75.0), None);
        assert_eq!(percentiles.iter().count(), 3);
    }
}
