use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// One class of a grouped frequency table.
///
/// The interval is `[lower, upper)`, except for the last class of a table,
/// which is closed on both ends. Classes are expected to be contiguous and
/// ascending but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedDatum {
    pub lower: f64,
    pub upper: f64,
    pub frequency: u64,
}

impl GroupedDatum {
    #[must_use]
    pub const fn new(lower: f64, upper: f64, frequency: u64) -> Self {
        Self {
            lower,
            upper,
            frequency,
        }
    }

    /// Class midpoint, used as the representative value of the class.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.lower, self.upper)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Sum of class frequencies.
///
/// # Errors
///
/// [`StatsError::InvalidArgument`] if the sum does not fit in a `u64`.
///
/// ```
/// # use statmaster_stats::grouped::total_frequency;
/// assert_eq!(total_frequency([3, 4, 5]).unwrap(), 12);
/// assert!(total_frequency([u64::MAX, 1]).is_err());
/// ```
pub fn total_frequency(frequencies: impl IntoIterator<Item = u64>) -> Result<u64, StatsError> {
    frequencies
        .into_iter()
        .try_fold(0_u64, u64::checked_add)
        .ok_or_else(|| StatsError::invalid("total frequency is too large"))
}
