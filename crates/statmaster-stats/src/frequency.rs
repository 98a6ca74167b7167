use serde::Serialize;

use crate::{
    error::StatsError,
    grouped::{GroupedDatum, total_frequency},
};

/// Multiplier of `log10(n)` in Sturges' rule.
pub const STURGES_COEFFICIENT: f64 = 3.322;

/// Largest class count accepted for a distribution.
pub const MAX_CLASSES: usize = 1_000;

/// Number of classes suggested by Sturges' rule, `round(1 + 3.322 · log10(n))`.
///
/// Returns 0 for an empty dataset.
///
/// ```
/// # use statmaster_stats::frequency::sturges_class_count;
/// assert_eq!(sturges_class_count(20), 5);
/// assert_eq!(sturges_class_count(200), 9);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn sturges_class_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (1.0 + STURGES_COEFFICIENT * (n as f64).log10()).round() as usize
}

/// Bounds of one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassLimits {
    pub lower: f64,
    pub upper: f64,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRow {
    pub class_limits: ClassLimits,
    pub midpoint: f64,
    pub frequency: u64,
    pub relative_frequency: f64,
    pub cumulative_frequency: u64,
}

/// A histogram bar: the class midpoint formatted with one decimal, and its
/// frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramPoint {
    pub name: String,
    pub frequency: u64,
}

/// A point of the cumulative frequency polygon (ogive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OgivePoint {
    pub value: f64,
    pub cumulative_percent: f64,
}

/// A frequency distribution over equal-width classes.
///
/// Classes start at the sample minimum and have width
/// `ceil(range / num_classes)`. Every class is half-open `[lower, upper)`
/// except the last, which also contains its upper bound, so each value is
/// counted exactly once and the last cumulative frequency always equals the
/// sample size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyDistribution {
    pub rows: Vec<ClassRow>,
    pub histogram: Vec<HistogramPoint>,
    /// `max - min` of the binned values.
    pub range: f64,
    pub class_width: f64,
    pub num_classes: usize,
    /// Sum of all class frequencies.
    pub total: u64,
}

impl FrequencyDistribution {
    /// Builds the distribution from unsorted values.
    ///
    /// `num_classes` of `None` (or `Some(0)`) uses [`sturges_class_count`].
    ///
    /// # Errors
    ///
    /// * [`StatsError::InsufficientData`] for fewer than 2 values
    /// * [`StatsError::ConstantData`] if all values are equal
    /// * [`StatsError::InvalidArgument`] if any value is NaN or infinite, or
    ///   more than [`MAX_CLASSES`] classes are requested
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmaster_stats::frequency::FrequencyDistribution;
    /// let values = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    /// let dist = FrequencyDistribution::new(&values, Some(4)).unwrap();
    /// assert_eq!(dist.class_width, 2.0);
    /// let freqs = dist.rows.iter().map(|r| r.frequency).collect::<Vec<_>>();
    /// assert_eq!(freqs, [3, 2, 2, 3]);
    /// assert_eq!(dist.rows.last().unwrap().cumulative_frequency, 10);
    /// ```
    pub fn new(values: &[f64], num_classes: Option<usize>) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_classes)
    }

    /// Builds the distribution from values sorted in ascending order.
    ///
    /// See [`FrequencyDistribution::new`].
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn from_sorted(
        sorted_values: &[f64],
        num_classes: Option<usize>,
    ) -> Result<Self, StatsError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let n = sorted_values.len();
        if n < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: n as u64,
            });
        }
        StatsError::ensure_finite(sorted_values)?;

        let min = sorted_values[0];
        let max = sorted_values[n - 1];
        let range = max - min;
        if range == 0.0 {
            return Err(StatsError::ConstantData);
        }

        let num_classes = match num_classes {
            Some(k) if k > MAX_CLASSES => {
                return Err(StatsError::invalid(format!(
                    "{k} classes requested, at most {MAX_CLASSES} are supported"
                )));
            }
            Some(k) if k > 0 => k,
            _ => sturges_class_count(n),
        };
        let class_width = (range / num_classes as f64).ceil();
        tracing::debug!(n, num_classes, class_width, "frequency classes");

        let lower_of = |idx: usize| min + idx as f64 * class_width;

        let mut counts = vec![0_u64; num_classes];
        let last = num_classes - 1;
        for &value in sorted_values {
            // Start from the arithmetic guess, then settle against the exact
            // boundaries so the half-open rule holds despite rounding.
            let mut idx = (((value - min) / class_width).floor() as usize).min(last);
            while idx > 0 && value < lower_of(idx) {
                idx -= 1;
            }
            while idx < last && value >= lower_of(idx + 1) {
                idx += 1;
            }
            counts[idx] += 1;
        }

        let limits = (0..num_classes)
            .map(|idx| ClassLimits {
                lower: lower_of(idx),
                upper: lower_of(idx + 1),
            })
            .collect::<Vec<_>>();
        let dist = Self::from_parts(&limits, &counts, range, class_width)?;
        debug_assert_eq!(dist.total, n as u64);
        Ok(dist)
    }

    fn from_parts(
        limits: &[ClassLimits],
        counts: &[u64],
        range: f64,
        class_width: f64,
    ) -> Result<Self, StatsError> {
        // Prefix sums never exceed the checked total.
        let total = total_frequency(counts.iter().copied())?;
        let mut cumulative_frequency = 0;
        let rows = limits
            .iter()
            .zip(counts)
            .map(|(&class_limits, &frequency)| {
                cumulative_frequency += frequency;
                ClassRow {
                    class_limits,
                    midpoint: f64::midpoint(class_limits.lower, class_limits.upper),
                    frequency,
                    relative_frequency: relative(frequency, total),
                    cumulative_frequency,
                }
            })
            .collect::<Vec<_>>();
        let histogram = rows
            .iter()
            .map(|row| HistogramPoint {
                name: format!("{:.1}", row.midpoint),
                frequency: row.frequency,
            })
            .collect();
        Ok(Self {
            num_classes: rows.len(),
            rows,
            histogram,
            range,
            class_width,
            total,
        })
    }

    /// Returns a copy with the frequency of class `index` replaced.
    ///
    /// Relative frequencies are taken over the edited total and cumulative
    /// frequencies are re-accumulated; class limits are unchanged.
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidArgument`] if `index` is out of range or the
    /// edited frequencies do not sum to a `u64`.
    pub fn with_frequency(&self, index: usize, frequency: u64) -> Result<Self, StatsError> {
        if index >= self.rows.len() {
            return Err(StatsError::invalid(format!(
                "class index {index} is out of range for {} classes",
                self.rows.len()
            )));
        }
        let limits = self.rows.iter().map(|row| row.class_limits).collect::<Vec<_>>();
        let mut counts = self.rows.iter().map(|row| row.frequency).collect::<Vec<_>>();
        counts[index] = frequency;
        Self::from_parts(&limits, &counts, self.range, self.class_width)
    }

    /// Points of the cumulative percentage curve, starting at 0% on the
    /// first lower bound and then one point per class upper bound.
    #[must_use]
    pub fn ogive(&self) -> Vec<OgivePoint> {
        let Some(first) = self.rows.first() else {
            return vec![];
        };
        let start = OgivePoint {
            value: first.class_limits.lower,
            cumulative_percent: 0.0,
        };
        std::iter::once(start)
            .chain(self.rows.iter().map(|row| OgivePoint {
                value: row.class_limits.upper,
                cumulative_percent: relative(row.cumulative_frequency, self.total) * 100.0,
            }))
            .collect()
    }

    /// The class table as grouped data, for the grouped-data formulas.
    #[must_use]
    pub fn to_grouped_table(&self) -> Vec<GroupedDatum> {
        self.rows
            .iter()
            .map(|row| {
                GroupedDatum::new(
                    row.class_limits.lower,
                    row.class_limits.upper,
                    row.frequency,
                )
            })
            .collect()
    }
}

#[expect(clippy::cast_precision_loss)]
fn relative(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: [f64; 20] = [
        18.5, 14.0, 17.0, 12.0, 19.0, 20.0, 11.5, 15.0, 16.0, 13.0, 17.5, 18.0, 10.0, 9.0, 14.5,
        19.5, 12.5, 8.0, 16.5, 15.5,
    ];

    #[test]
    fn test_sturges() {
        assert_eq!(sturges_class_count(0), 0);
        assert_eq!(sturges_class_count(1), 1);
        assert_eq!(sturges_class_count(2), 2);
        assert_eq!(sturges_class_count(20), 5);
    }

    #[test]
    fn test_grades_distribution() {
        let dist = FrequencyDistribution::new(&GRADES, None).unwrap();
        assert_eq!(dist.num_classes, 5);
        assert_eq!(dist.range, 12.0);
        assert_eq!(dist.class_width, 3.0);

        let limits = dist
            .rows
            .iter()
            .map(|r| (r.class_limits.lower, r.class_limits.upper))
            .collect::<Vec<_>>();
        assert_eq!(
            limits,
            [(8.0, 11.0), (11.0, 14.0), (14.0, 17.0), (17.0, 20.0), (20.0, 23.0)]
        );
        let freqs = dist.rows.iter().map(|r| r.frequency).collect::<Vec<_>>();
        assert_eq!(freqs, [3, 4, 6, 6, 1]);
        assert_eq!(dist.rows[4].cumulative_frequency, 20);

        let names = dist.histogram.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["9.5", "12.5", "15.5", "18.5", "21.5"]);
    }

    #[test]
    fn test_maximum_in_last_class() {
        // Width 2 puts the maximum exactly on the last upper bound.
        let dist = FrequencyDistribution::new(&[0.0, 1.0, 2.0, 3.0, 4.0], Some(2)).unwrap();
        let freqs = dist.rows.iter().map(|r| r.frequency).collect::<Vec<_>>();
        assert_eq!(freqs, [2, 3]);
        assert_eq!(dist.rows[1].class_limits.upper, 4.0);
    }

    #[test]
    fn test_relative_frequencies_sum_to_one() {
        let dist = FrequencyDistribution::new(&GRADES, Some(7)).unwrap();
        let sum = dist.rows.iter().map(|r| r.relative_frequency).sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(dist.total, 20);
    }

    #[test]
    fn test_zero_classes_falls_back_to_sturges() {
        let dist = FrequencyDistribution::new(&GRADES, Some(0)).unwrap();
        assert_eq!(dist.num_classes, 5);
    }

    #[test]
    fn test_constant_data() {
        assert_eq!(
            FrequencyDistribution::new(&[15.0; 7], None).unwrap_err(),
            StatsError::ConstantData
        );
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            FrequencyDistribution::new(&[1.0], None).unwrap_err(),
            StatsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert!(matches!(
            FrequencyDistribution::new(&[], None).unwrap_err(),
            StatsError::InsufficientData { actual: 0, .. }
        ));
    }

    #[test]
    fn test_fractional_range() {
        // range / k < 1 rounds the width up to 1, leaving trailing classes empty.
        let dist = FrequencyDistribution::new(&[0.1, 0.2, 0.3, 0.4], Some(3)).unwrap();
        assert_eq!(dist.class_width, 1.0);
        let freqs = dist.rows.iter().map(|r| r.frequency).collect::<Vec<_>>();
        assert_eq!(freqs, [4, 0, 0]);
    }

    #[test]
    fn test_with_frequency() {
        let dist = FrequencyDistribution::new(&GRADES, None).unwrap();
        let edited = dist.with_frequency(4, 5).unwrap();
        assert_eq!(edited.total, 24);
        let cumulative = edited
            .rows
            .iter()
            .map(|r| r.cumulative_frequency)
            .collect::<Vec<_>>();
        assert_eq!(cumulative, [3, 7, 13, 19, 24]);
        assert!((edited.rows[4].relative_frequency - 5.0 / 24.0).abs() < 1e-12);
        // Original is untouched.
        assert_eq!(dist.rows[4].frequency, 1);
        assert!(dist.with_frequency(5, 1).is_err());
    }

    #[test]
    fn test_edited_total_overflow() {
        let dist = FrequencyDistribution::new(&[1.0, 2.0, 3.0, 4.0], Some(2)).unwrap();
        assert!(matches!(
            dist.with_frequency(0, u64::MAX),
            Err(StatsError::InvalidArgument { .. })
        ));
        let edited = dist.with_frequency(0, u64::MAX - 2).unwrap();
        assert_eq!(edited.total, u64::MAX);
    }

    #[test]
    fn test_class_count_ceiling() {
        let dist = FrequencyDistribution::new(&[1.0, 2.0], Some(MAX_CLASSES)).unwrap();
        assert_eq!(dist.num_classes, MAX_CLASSES);
        for requested in [MAX_CLASSES + 1, usize::MAX] {
            assert!(matches!(
                FrequencyDistribution::new(&[1.0, 2.0], Some(requested)),
                Err(StatsError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn test_edited_to_zero_total() {
        let dist = FrequencyDistribution::new(&[1.0, 2.0], Some(1)).unwrap();
        let edited = dist.with_frequency(0, 0).unwrap();
        assert_eq!(edited.total, 0);
        assert_eq!(edited.rows[0].relative_frequency, 0.0);
        assert_eq!(edited.ogive()[1].cumulative_percent, 0.0);
    }

    #[test]
    fn test_ogive() {
        let dist = FrequencyDistribution::new(&GRADES, None).unwrap();
        let ogive = dist.ogive();
        assert_eq!(ogive.len(), 6);
        assert_eq!(ogive[0].value, 8.0);
        assert_eq!(ogive[0].cumulative_percent, 0.0);
        assert_eq!(ogive[1].value, 11.0);
        assert!((ogive[1].cumulative_percent - 15.0).abs() < 1e-12);
        assert!((ogive[5].cumulative_percent - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_grouped_table() {
        let dist = FrequencyDistribution::new(&GRADES, None).unwrap();
        let table = dist.to_grouped_table();
        assert_eq!(table.len(), 5);
        assert_eq!(table[0], GroupedDatum::new(8.0, 11.0, 3));
        assert_eq!(table.iter().map(|d| d.frequency).sum::<u64>(), 20);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn frequencies_conserve_sample_size(
            values in proptest::collection::vec(-1e4_f64..1e4, 2..300),
            classes in proptest::option::of(1_usize..20),
        ) {
            prop_assume!(values.iter().any(|v| *v != values[0]));
            let dist = FrequencyDistribution::new(&values, classes).unwrap();
            let sum = dist.rows.iter().map(|r| r.frequency).sum::<u64>();
            prop_assert_eq!(sum, values.len() as u64);
            prop_assert_eq!(dist.rows.last().unwrap().cumulative_frequency, values.len() as u64);
        }
    }
}
