//! Ready-made teaching samples.

use serde::Serialize;

const OUTLIER: [f64; 8] = [18.0, 19.0, 19.0, 20.0, 18.0, 2.0, 19.0, 20.0];
const UNIFORM: [f64; 7] = [15.0; 7];
const SKEWED: [f64; 8] = [2.0, 3.0, 3.0, 4.0, 5.0, 8.0, 12.0, 20.0];
const NORMAL: [f64; 8] = [10.0, 12.0, 14.0, 15.0, 15.0, 16.0, 18.0, 20.0];
const GRADES: [f64; 20] = [
    18.5, 14.0, 17.0, 12.0, 19.0, 20.0, 11.5, 15.0, 16.0, 13.0, 17.5, 18.0, 10.0, 9.0, 14.5, 19.5,
    12.5, 8.0, 16.5, 15.5,
];

/// Smallest distance between the current maximum and an injected outlier.
const MIN_OUTLIER_GAP: f64 = 20.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// One low value among tightly clustered ones.
    #[display("outlier")]
    Outlier,
    /// Identical values.
    #[display("uniform")]
    Uniform,
    /// Long right tail.
    #[display("skewed")]
    Skewed,
    /// Roughly bell-shaped.
    #[display("normal")]
    Normal,
    /// Twenty exam grades out of 20.
    #[display("grades")]
    Grades,
}

impl Scenario {
    pub const ALL: [Self; 5] = [
        Self::Outlier,
        Self::Uniform,
        Self::Skewed,
        Self::Normal,
        Self::Grades,
    ];

    #[must_use]
    pub fn data(self) -> &'static [f64] {
        match self {
            Self::Outlier => &OUTLIER,
            Self::Uniform => &UNIFORM,
            Self::Skewed => &SKEWED,
            Self::Normal => &NORMAL,
            Self::Grades => &GRADES,
        }
    }

    /// What the preset is meant to show.
    #[must_use]
    pub fn tip(self) -> &'static str {
        match self {
            Self::Outlier => {
                "An outlier pulls the mean toward it while the median barely moves."
            }
            Self::Uniform => {
                "With identical values there is no spread: variance and standard deviation are zero."
            }
            Self::Skewed => {
                "Most values are small, so the long right tail drags the mean above the median."
            }
            Self::Normal => "In a symmetric distribution the mean, median and mode sit close together.",
            Self::Grades => "A class's grades out of 20, the running example for frequency tables.",
        }
    }

    /// Sample after choosing this preset with `current` already entered.
    ///
    /// Every preset replaces the data, except [`Scenario::Outlier`] on a
    /// non-empty sample, which appends one value
    /// `max + max(20, 1.5 · range)` to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use statmaster_data::scenario::Scenario;
    ///
    /// assert_eq!(Scenario::Outlier.apply(&[]), Scenario::Outlier.data());
    /// assert_eq!(Scenario::Outlier.apply(&[10.0, 30.0]), [10.0, 30.0, 60.0]);
    /// assert_eq!(Scenario::Skewed.apply(&[1.0]), Scenario::Skewed.data());
    /// ```
    #[must_use]
    pub fn apply(self, current: &[f64]) -> Vec<f64> {
        if self != Self::Outlier || current.is_empty() {
            return self.data().to_vec();
        }
        let max = current.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = current.iter().copied().fold(f64::INFINITY, f64::min);
        let outlier = max + MIN_OUTLIER_GAP.max((max - min) * 1.5);
        tracing::debug!(outlier, "appending outlier");
        let mut data = current.to_vec();
        data.push(outlier);
        data
    }
}
