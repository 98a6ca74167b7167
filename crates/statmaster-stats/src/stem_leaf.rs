//! Stem-and-leaf display data.

use serde::Serialize;

use crate::error::StatsError;

/// One line of a stem-and-leaf display: the tens part and the units digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemRow {
    pub stem: i64,
    /// Units digits in ascending order, each in `0..10`.
    pub leaves: Vec<u8>,
}

/// Splits each value, rounded to the nearest integer (halves upward), into
/// `stem = floor(v / 10)` and a leaf in `0..10` with `stem * 10 + leaf == v`.
///
/// Stems are ascending and only stems that occur are emitted.
///
/// # Errors
///
/// [`StatsError::InvalidArgument`] if a value is not finite or does not fit
/// in an `i64` after rounding.
///
/// # Examples
///
/// ```
/// use statmaster_stats::stem_leaf::stem_and_leaf;
///
/// let rows = stem_and_leaf(&[23.0, 8.0, 21.4, 35.0, 27.0]).unwrap();
/// assert_eq!(rows.len(), 3);
/// assert_eq!((rows[0].stem, rows[0].leaves.clone()), (0, vec![8]));
/// assert_eq!((rows[1].stem, rows[1].leaves.clone()), (2, vec![1, 3, 7]));
/// assert_eq!((rows[2].stem, rows[2].leaves.clone()), (3, vec![5]));
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn stem_and_leaf(values: &[f64]) -> Result<Vec<StemRow>, StatsError> {
    StatsError::ensure_finite(values)?;

    let mut rounded = Vec::with_capacity(values.len());
    for &v in values {
        let r = (v + 0.5).floor();
        if r < i64::MIN as f64 || r >= i64::MAX as f64 {
            return Err(StatsError::invalid(format!(
                "{v} is too large for a stem-and-leaf display"
            )));
        }
        rounded.push(r as i64);
    }
    rounded.sort_unstable();

    let rows = rounded
        .chunk_by(|a, b| a.div_euclid(10) == b.div_euclid(10))
        .map(|chunk| StemRow {
            stem: chunk[0].div_euclid(10),
            leaves: chunk.iter().map(|v| v.rem_euclid(10) as u8).collect(),
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(stem_and_leaf(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_rounding_half_up() {
        let rows = stem_and_leaf(&[14.5, 14.4, 9.5]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stem, 1);
        assert_eq!(rows[0].leaves, vec![0, 4, 5]);
    }

    #[test]
    fn test_negative_values_use_euclidean_leaves() {
        let rows = stem_and_leaf(&[-3.0, -12.0, 4.0]).unwrap();
        let pairs = rows
            .iter()
            .map(|r| (r.stem, r.leaves.clone()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(-2, vec![8]), (-1, vec![7]), (0, vec![4])]);
        for row in &rows {
            for &leaf in &row.leaves {
                let v = row.stem * 10 + i64::from(leaf);
                assert!([-3, -12, 4].contains(&v));
            }
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            stem_and_leaf(&[1.0, f64::INFINITY]),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            stem_and_leaf(&[1e300]),
            Err(StatsError::InvalidArgument { .. })
        ));
    }
}
