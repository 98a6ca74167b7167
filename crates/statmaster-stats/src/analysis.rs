use serde::Serialize;

use crate::{
    descriptive::{DescriptiveStats, VarianceKind},
    error::StatsError,
    frequency::FrequencyDistribution,
    outliers::{TUKEY_MULTIPLIER, TukeyFences},
    percentiles::Quartiles,
    shape::{SkewnessShape, Variability},
};

/// Knobs for a [`SampleAnalysis`] pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Overrides the size-based variance denominator.
    pub variance_kind: Option<VarianceKind>,
    /// Explicit class count for the frequency distribution; Sturges' rule otherwise.
    pub num_classes: Option<usize>,
    /// Tukey fence multiplier.
    pub fence_multiplier: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            variance_kind: None,
            num_classes: None,
            fence_multiplier: TUKEY_MULTIPLIER,
        }
    }
}

/// Minimum, quartiles, median and maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Everything computed for a raw sample in one pass.
///
/// This combines:
/// - Descriptive statistics with their formulas
/// - Quartiles, Tukey fences and the outliers they exclude
/// - A five-number summary and plain-language shape readings
/// - The frequency distribution, if one can be formed
///
/// # Examples
///
/// ```
/// use statmaster_stats::analysis::{AnalysisOptions, SampleAnalysis};
///
/// let values = [18.0, 19.0, 19.0, 20.0, 18.0, 2.0, 19.0, 20.0];
/// let analysis = SampleAnalysis::new(&values, &AnalysisOptions::default()).unwrap();
///
/// assert_eq!(analysis.outliers, vec![2.0]);
/// assert_eq!(analysis.summary.min, 2.0);
/// assert!(analysis.distribution.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleAnalysis {
    /// The input in ascending order.
    pub sorted: Vec<f64>,
    pub stats: DescriptiveStats,
    pub quartiles: Quartiles,
    pub fences: TukeyFences,
    /// Values outside the fences, in input order.
    pub outliers: Vec<f64>,
    pub summary: FiveNumberSummary,
    pub shape: SkewnessShape,
    pub variability: Variability,
    /// Binned table, or [`StatsError::ConstantData`] when every value is equal.
    pub distribution: Result<FrequencyDistribution, StatsError>,
}

impl SampleAnalysis {
    /// Runs the full analysis over unsorted values.
    ///
    /// # Errors
    ///
    /// * [`StatsError::InsufficientData`] for fewer than 2 values
    /// * [`StatsError::InvalidArgument`] if any value is NaN or infinite, or
    ///   the fence multiplier is negative or not finite
    ///
    /// A constant sample is not an error; only the distribution slot fails.
    ///
    /// ```
    /// use statmaster_stats::{
    ///     analysis::{AnalysisOptions, SampleAnalysis},
    ///     error::StatsError,
    /// };
    ///
    /// let analysis = SampleAnalysis::new(&[15.0; 7], &AnalysisOptions::default()).unwrap();
    /// assert_eq!(analysis.stats.variance.value, 0.0);
    /// assert_eq!(analysis.distribution, Err(StatsError::ConstantData));
    /// ```
    pub fn new(values: &[f64], options: &AnalysisOptions) -> Result<Self, StatsError> {
        if values.len() < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                actual: values.len() as u64,
            });
        }
        if !options.fence_multiplier.is_finite() || options.fence_multiplier < 0.0 {
            return Err(StatsError::invalid(format!(
                "fence multiplier must be a non-negative number, got {}",
                options.fence_multiplier
            )));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let stats = DescriptiveStats::from_sorted(&sorted, options.variance_kind)?;

        let quartiles = Quartiles::from_sorted(&sorted)?;
        let fences = TukeyFences::with_multiplier(&quartiles, options.fence_multiplier);
        let outliers = fences.outliers(values);

        let distribution = match FrequencyDistribution::from_sorted(&sorted, options.num_classes) {
            Err(StatsError::ConstantData) => {
                tracing::debug!("constant sample, no frequency distribution");
                Err(StatsError::ConstantData)
            }
            Err(err) => return Err(err),
            Ok(distribution) => Ok(distribution),
        };

        let summary = FiveNumberSummary {
            min: stats.min,
            q1: quartiles.q1,
            median: stats.median.value,
            q3: quartiles.q3,
            max: stats.max,
        };

        Ok(Self {
            shape: SkewnessShape::classify(stats.skewness.value),
            variability: Variability::classify(stats.cv.value),
            sorted,
            stats,
            quartiles,
            fences,
            outliers,
            summary,
            distribution,
        })
    }
}
