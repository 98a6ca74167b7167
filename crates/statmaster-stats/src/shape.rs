//! Plain-language readings of skewness and coefficient of variation.

use serde::Serialize;

/// Direction and strength of asymmetry, read from Pearson's skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SkewnessShape {
    #[display("strongly right-skewed")]
    StronglyRight,
    #[display("right-skewed")]
    Right,
    #[display("approximately symmetric")]
    Symmetric,
    #[display("left-skewed")]
    Left,
    #[display("strongly left-skewed")]
    StronglyLeft,
}

impl SkewnessShape {
    /// ```
    /// # use statmaster_stats::shape::SkewnessShape;
    /// assert_eq!(SkewnessShape::classify(0.8), SkewnessShape::StronglyRight);
    /// assert_eq!(SkewnessShape::classify(0.1), SkewnessShape::Symmetric);
    /// assert_eq!(SkewnessShape::classify(-0.3), SkewnessShape::Left);
    /// ```
    #[must_use]
    pub fn classify(skewness: f64) -> Self {
        if skewness > 0.5 {
            Self::StronglyRight
        } else if skewness > 0.1 {
            Self::Right
        } else if skewness < -0.5 {
            Self::StronglyLeft
        } else if skewness < -0.1 {
            Self::Left
        } else {
            Self::Symmetric
        }
    }
}

/// Relative spread, read from the coefficient of variation in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Variability {
    #[display("low variability")]
    Low,
    #[display("moderate variability")]
    Moderate,
    #[display("high variability")]
    High,
}

impl Variability {
    #[must_use]
    pub fn classify(cv: f64) -> Self {
        if cv <= 15.0 {
            Self::Low
        } else if cv <= 30.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skewness_boundaries_are_exclusive() {
        assert_eq!(SkewnessShape::classify(0.5), SkewnessShape::Right);
        assert_eq!(SkewnessShape::classify(0.51), SkewnessShape::StronglyRight);
        assert_eq!(SkewnessShape::classify(-0.1), SkewnessShape::Symmetric);
        assert_eq!(SkewnessShape::classify(-0.5), SkewnessShape::Left);
        assert_eq!(SkewnessShape::classify(-2.0), SkewnessShape::StronglyLeft);
        assert_eq!(SkewnessShape::classify(0.0), SkewnessShape::Symmetric);
    }

    #[test]
    fn test_variability_boundaries_are_inclusive() {
        assert_eq!(Variability::classify(0.0), Variability::Low);
        assert_eq!(Variability::classify(15.0), Variability::Low);
        assert_eq!(Variability::classify(15.01), Variability::Moderate);
        assert_eq!(Variability::classify(30.0), Variability::Moderate);
        assert_eq!(Variability::classify(45.0), Variability::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(SkewnessShape::Right.to_string(), "right-skewed");
        assert_eq!(Variability::High.to_string(), "high variability");
    }
}
