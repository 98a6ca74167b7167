//! Descriptive statistics for raw samples and grouped frequency tables.
//!
//! Both paths produce a [`DescriptiveStats`] whose fields pair each value with
//! a [`Formula`] describing how it was derived, so a front end can show the
//! worked calculation next to the number.

use serde::Serialize;

use crate::{
    error::StatsError,
    grouped::{GroupedDatum, total_frequency},
};

/// Sample sizes strictly between 1 and this value use the `n - 1` denominator.
pub const SAMPLE_VARIANCE_MAX_N: u64 = 30;

/// Denominator choice for variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceKind {
    /// Divide by `n - 1`.
    Sample,
    /// Divide by `n`.
    Population,
}

impl VarianceKind {
    /// Picks the denominator from the sample size alone.
    ///
    /// `1 < n < 30` is treated as a sample, everything else as a population.
    ///
    /// ```
    /// # use statmaster_stats::descriptive::VarianceKind;
    /// assert_eq!(VarianceKind::for_count(1), VarianceKind::Population);
    /// assert_eq!(VarianceKind::for_count(10), VarianceKind::Sample);
    /// assert_eq!(VarianceKind::for_count(30), VarianceKind::Population);
    /// ```
    #[must_use]
    pub fn for_count(n: u64) -> Self {
        if n > 1 && n < SAMPLE_VARIANCE_MAX_N {
            Self::Sample
        } else {
            Self::Population
        }
    }

    /// Uses `requested` when given, otherwise [`VarianceKind::for_count`].
    #[must_use]
    pub fn resolve(requested: Option<Self>, n: u64) -> Self {
        let kind = requested.unwrap_or_else(|| Self::for_count(n));
        tracing::debug!(n, ?kind, explicit = requested.is_some(), "variance kind");
        kind
    }

    #[expect(clippy::cast_precision_loss)]
    fn denominator(self, n: u64) -> Result<f64, StatsError> {
        match self {
            Self::Sample if n < 2 => Err(StatsError::InsufficientData {
                required: 2,
                actual: n,
            }),
            Self::Sample => Ok((n - 1) as f64),
            Self::Population => Ok(n as f64),
        }
    }
}

/// Human-facing description of how a statistic was derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formula {
    /// The general formula, e.g. `x̄ = Σx / n`.
    pub expression: &'static str,
    /// The formula with this dataset's numbers substituted.
    pub calculation: String,
}

impl Formula {
    fn new(expression: &'static str, calculation: impl Into<String>) -> Self {
        Self {
            expression,
            calculation: calculation.into(),
        }
    }
}

/// A computed value together with its [`Formula`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic<T> {
    pub value: T,
    pub formula: Formula,
}

impl<T> Statistic<T> {
    fn new(value: T, formula: Formula) -> Self {
        Self { value, formula }
    }
}

/// Borrowed input to [`DescriptiveStats::compute`].
#[derive(Debug, Clone, Copy)]
pub enum DataSet<'a> {
    /// Individual observations.
    Raw(&'a [f64]),
    /// Binned observations; see [`GroupedDatum`].
    Grouped(&'a [GroupedDatum]),
}

/// Central tendency, dispersion and shape of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of observations (total frequency for grouped data).
    pub count: u64,
    /// Smallest value (lowest class bound for grouped data).
    pub min: f64,
    /// Largest value (highest class bound for grouped data).
    pub max: f64,
    /// Denominator used for the variance.
    pub variance_kind: VarianceKind,
    pub mean: Statistic<f64>,
    pub median: Statistic<f64>,
    /// All modes in ascending order; empty when the data has no mode.
    pub mode: Statistic<Vec<f64>>,
    pub variance: Statistic<f64>,
    pub std_dev: Statistic<f64>,
    pub range: Statistic<f64>,
    /// Coefficient of variation in percent; 0 when the mean is 0.
    pub cv: Statistic<f64>,
    /// Pearson's second skewness coefficient; 0 when the standard deviation is 0.
    pub skewness: Statistic<f64>,
}

impl DescriptiveStats {
    /// Computes statistics for either kind of input.
    ///
    /// `variance_kind` overrides the size-based denominator policy.
    pub fn compute(
        data: DataSet<'_>,
        variance_kind: Option<VarianceKind>,
    ) -> Result<Self, StatsError> {
        match data {
            DataSet::Raw(values) => Self::from_raw(values, variance_kind),
            DataSet::Grouped(table) => Self::from_grouped(table, variance_kind),
        }
    }

    /// Computes statistics from individual observations.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyData`] if `values` is empty
    /// * [`StatsError::InsufficientData`] if a sample variance is requested for one value
    /// * [`StatsError::InvalidArgument`] if any value is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmaster_stats::descriptive::{DescriptiveStats, VarianceKind};
    /// let stats = DescriptiveStats::from_raw(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], None).unwrap();
    /// assert_eq!(stats.mean.value, 5.0);
    /// assert_eq!(stats.median.value, 4.5);
    /// assert_eq!(stats.mode.value, vec![4.0]);
    /// assert_eq!(stats.variance_kind, VarianceKind::Sample);
    /// ```
    pub fn from_raw(
        values: &[f64],
        variance_kind: Option<VarianceKind>,
    ) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, variance_kind)
    }

    /// Computes statistics from observations sorted in ascending order.
    ///
    /// See [`DescriptiveStats::from_raw`].
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(
        sorted: &[f64],
        variance_kind: Option<VarianceKind>,
    ) -> Result<Self, StatsError> {
        if sorted.is_empty() {
            return Err(StatsError::EmptyData);
        }
        StatsError::ensure_finite(sorted)?;
        debug_assert!(
            sorted.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let count = sorted.len() as u64;
        let n = count as f64;
        let kind = VarianceKind::resolve(variance_kind, count);
        let denominator = kind.denominator(count)?;

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let sum = sorted.iter().sum::<f64>();
        let mean = sum / n;
        let median = median_of_sorted(sorted);
        let (modes, max_frequency) = modes_of_sorted(sorted);
        let squared_deviations = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
        let variance = squared_deviations / denominator;
        let std_dev = variance.sqrt();
        let range = max - min;

        let middle_position = (n + 1.0) / 2.0;
        Ok(Self {
            count,
            min,
            max,
            variance_kind: kind,
            mean: Statistic::new(
                mean,
                Formula::new("x̄ = Σx / n", format!("{sum:.2} / {count} = {mean:.3}")),
            ),
            median: Statistic::new(
                median,
                Formula::new(
                    "middle value of the sorted data",
                    format!("value at position {middle_position}"),
                ),
            ),
            mode: Statistic::new(
                modes,
                Formula::new(
                    "value(s) with the highest frequency",
                    format!("highest frequency: {max_frequency}"),
                ),
            ),
            variance: variance_statistic(kind, false, squared_deviations, denominator, variance),
            std_dev: std_dev_statistic(kind, variance, std_dev),
            range: Statistic::new(
                range,
                Formula::new(
                    "R = max(x) - min(x)",
                    format!("{max} - {min} = {range}"),
                ),
            ),
            cv: cv_statistic(kind, std_dev, mean),
            skewness: skewness_statistic(kind, mean, median, std_dev),
        })
    }

    /// Computes statistics from a grouped frequency table.
    ///
    /// Class midpoints stand in for the observations. The median and mode are
    /// interpolated inside the median class and the modal class.
    ///
    /// # Errors
    ///
    /// * [`StatsError::EmptyData`] if the table is empty or every frequency is zero
    /// * [`StatsError::InsufficientData`] if a sample variance is requested for one value
    /// * [`StatsError::InvalidArgument`] if a class bound is NaN or infinite, or
    ///   the frequencies do not sum to a `u64`
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmaster_stats::{descriptive::DescriptiveStats, grouped::GroupedDatum};
    /// let table = [
    ///     GroupedDatum::new(0.0, 10.0, 2),
    ///     GroupedDatum::new(10.0, 20.0, 6),
    ///     GroupedDatum::new(20.0, 30.0, 2),
    /// ];
    /// let stats = DescriptiveStats::from_grouped(&table, None).unwrap();
    /// assert_eq!(stats.mean.value, 15.0);
    /// assert_eq!(stats.median.value, 15.0);
    /// assert_eq!(stats.mode.value, vec![15.0]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn from_grouped(
        table: &[GroupedDatum],
        variance_kind: Option<VarianceKind>,
    ) -> Result<Self, StatsError> {
        let count = total_frequency(table.iter().map(|row| row.frequency))?;
        if count == 0 {
            return Err(StatsError::EmptyData);
        }
        for (idx, row) in table.iter().enumerate() {
            if !row.lower.is_finite() || !row.upper.is_finite() {
                return Err(StatsError::invalid(format!(
                    "class {idx} has a non-finite bound"
                )));
            }
        }

        let n = count as f64;
        let kind = VarianceKind::resolve(variance_kind, count);
        let denominator = kind.denominator(count)?;

        let cumulative = table
            .iter()
            .scan(0_u64, |acc, row| {
                *acc += row.frequency;
                Some(*acc)
            })
            .collect::<Vec<_>>();

        let sum_fx = table
            .iter()
            .map(|row| row.frequency as f64 * row.midpoint())
            .sum::<f64>();
        let mean = sum_fx / n;

        // Median class: first class whose cumulative frequency reaches n/2.
        let half = n / 2.0;
        let median_idx = cumulative
            .iter()
            .position(|&c| c as f64 >= half)
            .unwrap_or(table.len() - 1);
        let median_class = &table[median_idx];
        let f_prev = if median_idx > 0 {
            cumulative[median_idx - 1]
        } else {
            0
        };
        let f_med = median_class.frequency;
        let median_width = median_class.width();
        let median = if f_med > 0 {
            median_class.lower + ((half - f_prev as f64) / f_med as f64) * median_width
        } else {
            median_class.lower
        };

        // Modal class: first class with the highest frequency.
        let mode_idx = table
            .iter()
            .enumerate()
            .fold(0, |best, (idx, row)| {
                if row.frequency > table[best].frequency {
                    idx
                } else {
                    best
                }
            });
        let modal_class = &table[mode_idx];
        let f_mode = modal_class.frequency;
        let before = mode_idx
            .checked_sub(1)
            .map_or(0, |idx| table[idx].frequency);
        let after = table.get(mode_idx + 1).map_or(0, |row| row.frequency);
        let d1 = (f_mode - before) as f64;
        let d2 = (f_mode - after) as f64;
        let modal_width = modal_class.width();
        let mode = if d1 + d2 > 0.0 {
            modal_class.lower + (d1 / (d1 + d2)) * modal_width
        } else {
            modal_class.lower
        };

        let squared_deviations = table
            .iter()
            .map(|row| row.frequency as f64 * (row.midpoint() - mean).powi(2))
            .sum::<f64>();
        let variance = squared_deviations / denominator;
        let std_dev = variance.sqrt();

        let min = table
            .iter()
            .map(|row| row.lower)
            .fold(f64::INFINITY, f64::min);
        let max = table
            .iter()
            .map(|row| row.upper)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        Ok(Self {
            count,
            min,
            max,
            variance_kind: kind,
            mean: Statistic::new(
                mean,
                Formula::new(
                    "x̄ = Σ(fi · xi) / n",
                    format!("{sum_fx:.2} / {count} = {mean:.3}"),
                ),
            ),
            median: Statistic::new(
                median,
                Formula::new(
                    "Md = L + ((n/2 - F) / f) · w",
                    format!(
                        "{} + (({half} - {f_prev}) / {f_med}) · {median_width} = {median:.3}",
                        median_class.lower
                    ),
                ),
            ),
            mode: Statistic::new(
                vec![mode],
                Formula::new(
                    "Mo = L + (d1 / (d1 + d2)) · w",
                    format!(
                        "{} + ({d1} / ({d1} + {d2})) · {modal_width} = {mode:.3}",
                        modal_class.lower
                    ),
                ),
            ),
            variance: variance_statistic(kind, true, squared_deviations, denominator, variance),
            std_dev: std_dev_statistic(kind, variance, std_dev),
            range: Statistic::new(
                range,
                Formula::new(
                    "R = max(upper) - min(lower)",
                    format!("{max} - {min} = {range}"),
                ),
            ),
            cv: cv_statistic(kind, std_dev, mean),
            skewness: skewness_statistic(kind, mean, median, std_dev),
        })
    }
}

/// Median of ascending values: the central value, or the average of the two
/// central values for an even count.
///
/// Returns NaN for an empty slice.
#[must_use]
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    debug_assert!(
        sorted.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 0 {
        f64::midpoint(sorted[n / 2 - 1], sorted[n / 2])
    } else {
        sorted[n / 2]
    }
}

/// Modes of ascending values and the highest frequency seen.
///
/// A value is a mode when its frequency is the maximum and that maximum is
/// above 1. If every distinct value shares the same frequency the data has no
/// mode and the list is empty.
#[must_use]
pub fn modes_of_sorted(sorted: &[f64]) -> (Vec<f64>, u64) {
    debug_assert!(
        sorted.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    #[allow(clippy::float_cmp)]
    let runs = sorted
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len() as u64))
        .collect::<Vec<_>>();
    let max_frequency = runs.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let uniform = runs.iter().all(|&(_, c)| c == max_frequency);
    let modes = if max_frequency > 1 && !uniform {
        runs.iter()
            .filter(|&&(_, c)| c == max_frequency)
            .map(|&(v, _)| v)
            .collect()
    } else {
        vec![]
    };
    (modes, max_frequency)
}

/// Coefficient of variation in percent, defined as 0 for a zero mean.
#[must_use]
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        0.0
    } else {
        (std_dev / mean.abs()) * 100.0
    }
}

/// Pearson's second skewness coefficient `3 (mean - median) / std_dev`,
/// defined as 0 for a zero standard deviation.
#[must_use]
pub fn pearson_skewness(mean: f64, median: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 {
        3.0 * (mean - median) / std_dev
    } else {
        0.0
    }
}

fn variance_statistic(
    kind: VarianceKind,
    grouped: bool,
    squared_deviations: f64,
    denominator: f64,
    variance: f64,
) -> Statistic<f64> {
    let expression = match (kind, grouped) {
        (VarianceKind::Sample, false) => "s² = Σ(x - x̄)² / (n - 1)",
        (VarianceKind::Population, false) => "σ² = Σ(x - x̄)² / n",
        (VarianceKind::Sample, true) => "s² = Σ(fi · (xi - x̄)²) / (n - 1)",
        (VarianceKind::Population, true) => "σ² = Σ(fi · (xi - x̄)²) / n",
    };
    Statistic::new(
        variance,
        Formula::new(
            expression,
            format!("{squared_deviations:.2} / {denominator} = {variance:.3}"),
        ),
    )
}

fn std_dev_statistic(kind: VarianceKind, variance: f64, std_dev: f64) -> Statistic<f64> {
    let expression = match kind {
        VarianceKind::Sample => "s = √s²",
        VarianceKind::Population => "σ = √σ²",
    };
    Statistic::new(
        std_dev,
        Formula::new(expression, format!("√{variance:.3} = {std_dev:.3}")),
    )
}

fn cv_statistic(kind: VarianceKind, std_dev: f64, mean: f64) -> Statistic<f64> {
    let cv = coefficient_of_variation(std_dev, mean);
    let expression = match kind {
        VarianceKind::Sample => "CV = (s / |x̄|) · 100",
        VarianceKind::Population => "CV = (σ / |x̄|) · 100",
    };
    Statistic::new(
        cv,
        Formula::new(
            expression,
            format!("({std_dev:.3} / |{mean:.3}|) · 100 = {cv:.2}%"),
        ),
    )
}

fn skewness_statistic(
    kind: VarianceKind,
    mean: f64,
    median: f64,
    std_dev: f64,
) -> Statistic<f64> {
    let skewness = pearson_skewness(mean, median, std_dev);
    let expression = match kind {
        VarianceKind::Sample => "Sk = 3 (x̄ - Md) / s",
        VarianceKind::Population => "Sk = 3 (x̄ - Md) / σ",
    };
    Statistic::new(
        skewness,
        Formula::new(
            expression,
            format!("3 · ({mean:.3} - {median:.3}) / {std_dev:.3} = {skewness:.3}"),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: [f64; 20] = [
        18.5, 14.0, 17.0, 12.0, 19.0, 20.0, 11.5, 15.0, 16.0, 13.0, 17.5, 18.0, 10.0, 9.0, 14.5,
        19.5, 12.5, 8.0, 16.5, 15.5,
    ];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_grades_scenario() {
        let stats = DescriptiveStats::from_raw(&GRADES, None).unwrap();
        assert_eq!(stats.count, 20);
        assert_eq!(stats.variance_kind, VarianceKind::Sample);
        assert_close(stats.mean.value, 14.95);
        assert_close(stats.median.value, 15.25);
        assert_close(stats.range.value, 12.0);
        assert!(stats.mode.value.is_empty());
    }

    #[test]
    fn test_population_variance_policy() {
        let values = (1..=30).map(f64::from).collect::<Vec<_>>();
        let stats = DescriptiveStats::from_raw(&values, None).unwrap();
        assert_eq!(stats.variance_kind, VarianceKind::Population);
        // Population variance of 1..=n is (n^2 - 1) / 12.
        assert_close(stats.variance.value, (900.0 - 1.0) / 12.0);
    }

    #[test]
    fn test_sample_variance_policy() {
        let stats = DescriptiveStats::from_raw(&[1.0, 2.0, 3.0, 4.0], None).unwrap();
        assert_eq!(stats.variance_kind, VarianceKind::Sample);
        assert_close(stats.variance.value, 5.0 / 3.0);
        assert_close(stats.std_dev.value, (5.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn test_explicit_variance_kind() {
        let stats =
            DescriptiveStats::from_raw(&[1.0, 2.0, 3.0, 4.0], Some(VarianceKind::Population))
                .unwrap();
        assert_close(stats.variance.value, 1.25);
    }

    #[test]
    fn test_from_sorted_matches_from_raw() {
        let mut sorted = GRADES.to_vec();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(
            DescriptiveStats::from_sorted(&sorted, None).unwrap(),
            DescriptiveStats::from_raw(&GRADES, None).unwrap()
        );
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::from_raw(&[7.0], None).unwrap();
        assert_eq!(stats.variance_kind, VarianceKind::Population);
        assert_close(stats.variance.value, 0.0);
        assert_close(stats.median.value, 7.0);
        assert_close(stats.skewness.value, 0.0);

        let err = DescriptiveStats::from_raw(&[7.0], Some(VarianceKind::Sample)).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(
            DescriptiveStats::from_raw(&[], None).unwrap_err(),
            StatsError::EmptyData
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = DescriptiveStats::from_raw(&[1.0, f64::NAN], None).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument { .. }));
    }

    #[test]
    fn test_constant_data() {
        let stats = DescriptiveStats::from_raw(&[15.0; 7], None).unwrap();
        assert_close(stats.variance.value, 0.0);
        assert_close(stats.std_dev.value, 0.0);
        assert_close(stats.cv.value, 0.0);
        assert_close(stats.range.value, 0.0);
        // A single distinct value has a uniform frequency distribution.
        assert!(stats.mode.value.is_empty());
    }

    #[test]
    fn test_zero_mean_cv() {
        let stats = DescriptiveStats::from_raw(&[-2.0, 2.0, -1.0, 1.0], None).unwrap();
        assert_close(stats.mean.value, 0.0);
        assert_close(stats.cv.value, 0.0);
    }

    #[test]
    fn test_multimodal() {
        let (modes, max) = modes_of_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(modes, vec![1.0, 2.0]);
        assert_eq!(max, 2);
    }

    #[test]
    fn test_uniform_frequencies_have_no_mode() {
        assert!(modes_of_sorted(&[1.0, 1.0, 2.0, 2.0]).0.is_empty());
        assert!(modes_of_sorted(&[1.0, 2.0, 3.0]).0.is_empty());
    }

    #[test]
    fn test_modes_are_ascending() {
        let stats = DescriptiveStats::from_raw(&[9.0, 3.0, 9.0, 3.0, 5.0], None).unwrap();
        assert_eq!(stats.mode.value, vec![3.0, 9.0]);
    }

    #[test]
    fn test_skewness() {
        let values = [2.0, 3.0, 3.0, 4.0, 5.0, 8.0, 12.0, 20.0];
        let stats = DescriptiveStats::from_raw(&values, None).unwrap();
        assert!(stats.mean.value > stats.median.value);
        assert!(stats.skewness.value > 0.0);
        let expected =
            3.0 * (stats.mean.value - stats.median.value) / stats.std_dev.value;
        assert_close(stats.skewness.value, expected);
    }

    #[test]
    fn test_grouped_interpolation() {
        let table = [
            GroupedDatum::new(10.0, 20.0, 3),
            GroupedDatum::new(20.0, 30.0, 5),
            GroupedDatum::new(30.0, 40.0, 9),
            GroupedDatum::new(40.0, 50.0, 3),
        ];
        let stats = DescriptiveStats::from_grouped(&table, None).unwrap();
        assert_eq!(stats.count, 20);
        // Median class is [30, 40): 30 + ((10 - 8) / 9) * 10
        assert_close(stats.median.value, 30.0 + (2.0 / 9.0) * 10.0);
        // Modal class is [30, 40): d1 = 4, d2 = 6
        assert_close(stats.mode.value[0], 30.0 + (4.0 / 10.0) * 10.0);
        assert_close(stats.mean.value, (3.0 * 15.0 + 5.0 * 25.0 + 9.0 * 35.0 + 3.0 * 45.0) / 20.0);
        assert_close(stats.range.value, 40.0);
    }

    #[test]
    fn test_grouped_mode_without_neighbors() {
        let table = [GroupedDatum::new(0.0, 4.0, 5)];
        let stats = DescriptiveStats::from_grouped(&table, None).unwrap();
        // d1 = d2 = 5, so the mode sits at the class midpoint.
        assert_close(stats.mode.value[0], 2.0);
        assert_close(stats.median.value, 2.0);
    }

    #[test]
    fn test_grouped_flat_mode() {
        let table = [
            GroupedDatum::new(0.0, 1.0, 2),
            GroupedDatum::new(1.0, 2.0, 2),
            GroupedDatum::new(2.0, 3.0, 2),
        ];
        let stats = DescriptiveStats::from_grouped(&table, None).unwrap();
        // First modal class: d1 = 2 (no previous class), d2 = 0.
        assert_close(stats.mode.value[0], 1.0);
    }

    #[test]
    fn test_grouped_empty() {
        assert_eq!(
            DescriptiveStats::from_grouped(&[], None).unwrap_err(),
            StatsError::EmptyData
        );
        let table = [GroupedDatum::new(0.0, 1.0, 0)];
        assert_eq!(
            DescriptiveStats::from_grouped(&table, None).unwrap_err(),
            StatsError::EmptyData
        );
    }

    #[test]
    fn test_grouped_frequency_overflow() {
        let table = [
            GroupedDatum::new(0.0, 1.0, u64::MAX),
            GroupedDatum::new(1.0, 2.0, 1),
        ];
        assert!(matches!(
            DescriptiveStats::from_grouped(&table, None),
            Err(StatsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_grouped_matches_expanded_raw() {
        let table = [
            GroupedDatum::new(0.0, 2.0, 3),
            GroupedDatum::new(2.0, 4.0, 1),
            GroupedDatum::new(4.0, 6.0, 4),
        ];
        let expanded = table
            .iter()
            .flat_map(|row| std::iter::repeat_n(row.midpoint(), row.frequency.try_into().unwrap()))
            .collect::<Vec<_>>();
        let grouped = DescriptiveStats::compute(DataSet::Grouped(&table), None).unwrap();
        let raw = DescriptiveStats::compute(DataSet::Raw(&expanded), None).unwrap();
        assert_eq!(grouped.count, raw.count);
        assert_eq!(grouped.variance_kind, raw.variance_kind);
        assert_close(grouped.mean.value, raw.mean.value);
        assert_close(grouped.variance.value, raw.variance.value);
        assert_close(grouped.cv.value, raw.cv.value);
    }

    #[test]
    fn test_formula_text() {
        let stats = DescriptiveStats::from_raw(&[1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(stats.mean.formula.expression, "x̄ = Σx / n");
        assert_eq!(stats.mean.formula.calculation, "6.00 / 3 = 2.000");
        assert_eq!(stats.variance.formula.expression, "s² = Σ(x - x̄)² / (n - 1)");
    }
}
