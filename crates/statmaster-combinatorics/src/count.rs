use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::CombinatoricsError;

/// `n!` as an exact integer.
///
/// # Errors
///
/// [`CombinatoricsError::Negative`] if `n < 0`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use statmaster_combinatorics::factorial;
///
/// assert_eq!(factorial(0).unwrap(), BigUint::from(1_u32));
/// assert_eq!(factorial(5).unwrap(), BigUint::from(120_u32));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint, CombinatoricsError> {
    let n = u64::try_from(n).map_err(|_| CombinatoricsError::Negative { name: "n", value: n })?;
    Ok(falling_product(n, n))
}

/// Number of ordered selections of `r` items from `n`.
///
/// Returns 0 when either argument is negative or `r > n`.
#[must_use]
pub fn permutation(n: i64, r: i64) -> BigUint {
    match domain(n, r) {
        Some((n, r)) => falling_product(n, r),
        None => BigUint::zero(),
    }
}

/// Number of unordered selections of `r` items from `n`.
///
/// Returns 0 when either argument is negative or `r > n`.
#[must_use]
pub fn combination(n: i64, r: i64) -> BigUint {
    let Some((n, r)) = domain(n, r) else {
        return BigUint::zero();
    };
    let r = r.min(n - r);
    let mut result = BigUint::one();
    // After step i the product is C(n - r + i, i), so the division is exact.
    for i in 1..=r {
        result *= n - r + i;
        result /= i;
    }
    result
}

/// Converts an exact count to `f64`, saturating to infinity when it does not fit.
///
/// Precision is lost above 2^53.
#[must_use]
pub fn to_f64_lossy(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

/// `n · (n-1) · … · (n-r+1)`.
fn falling_product(n: u64, r: u64) -> BigUint {
    (n - r + 1..=n).fold(BigUint::one(), |acc, k| acc * k)
}

fn domain(n: i64, r: i64) -> Option<(u64, u64)> {
    let n = u64::try_from(n).ok()?;
    let r = u64::try_from(r).ok()?;
    (r <= n).then_some((n, r))
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn combination_is_symmetric((n, r) in (0_i64..80).prop_flat_map(|n| (Just(n), 0..=n))) {
            prop_assert_eq!(combination(n, r), combination(n, n - r));
        }

        #[test]
        fn permutation_is_combination_times_arrangements(
            (n, r) in (0_i64..60).prop_flat_map(|n| (Just(n), 0..=n)),
        ) {
            prop_assert_eq!(permutation(n, r), combination(n, r) * factorial(r).unwrap());
        }
    }
}
