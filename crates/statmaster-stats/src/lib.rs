//! Statistics engines for the Statmaster workbench.
//!
//! Every entry point is a pure function of its input: nothing is cached and
//! failures come back as [`StatsError`] rather than panics.
//!
//! - **Descriptive statistics**: mean, median, mode, variance, standard deviation,
//!   range, coefficient of variation and skewness, for raw or grouped data
//! - **Frequency distributions**: Sturges-sized class tables with cumulative counts
//! - **Percentiles and outliers**: interpolated quantiles, percentile ranks, Tukey fences
//! - **Sample analysis**: all of the above in one pass
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics with their formulas
//! - [`grouped`]: Grouped frequency table input rows
//! - [`frequency`]: Frequency distribution builder
//! - [`percentiles`]: Quartiles, percentiles and percentile ranks
//! - [`outliers`]: Tukey fence outlier detection
//! - [`shape`]: Plain-language readings of skewness and spread
//! - [`stem_leaf`]: Stem-and-leaf display data
//! - [`analysis`]: Combined analysis of a raw sample
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use statmaster_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::from_raw(&[1.0, 2.0, 3.0, 4.0, 5.0], None).unwrap();
//! assert_eq!(stats.mean.value, 3.0);
//! assert_eq!(stats.variance.value, 2.5);
//! ```
//!
//! ## Building a frequency distribution
//!
//! ```
//! use statmaster_stats::frequency::FrequencyDistribution;
//!
//! let values = [
//!     18.5, 14.0, 17.0, 12.0, 19.0, 20.0, 11.5, 15.0, 16.0, 13.0,
//!     17.5, 18.0, 10.0, 9.0, 14.5, 19.5, 12.5, 8.0, 16.5, 15.5,
//! ];
//! let dist = FrequencyDistribution::new(&values, None).unwrap();
//! assert_eq!(dist.num_classes, 5);
//! assert_eq!(dist.rows.last().unwrap().cumulative_frequency, 20);
//! ```
//!
//! ## Finding outliers
//!
//! ```
//! use statmaster_stats::analysis::{AnalysisOptions, SampleAnalysis};
//!
//! let analysis = SampleAnalysis::new(&[10.0, 12.0, 11.0, 13.0, 95.0], &AnalysisOptions::default()).unwrap();
//! assert_eq!(analysis.outliers, vec![95.0]);
//! ```

pub use self::error::StatsError;

pub mod analysis;
pub mod descriptive;
pub mod error;
pub mod frequency;
pub mod grouped;
pub mod outliers;
pub mod percentiles;
pub mod shape;
pub mod stem_leaf;
