use num_bigint::BigUint;
use serde::Serialize;

use crate::{
    count::{combination, permutation},
    enumerate::{generate_combinations, generate_permutations},
    error::CombinatoricsError,
};

/// Largest pool for which selections are listed one by one.
pub const MAX_ENUMERATION_ITEMS: u64 = 5;

/// Largest pool a query accepts. `170!` is the last factorial that fits an `f64`.
pub const MAX_COUNT_N: u64 = 170;

/// A validated "choose `r` from `n`" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountingQuery {
    pub n: u64,
    pub r: u64,
}

/// Counts for a [`CountingQuery`], plus the listed selections for small pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountingReport {
    pub n: u64,
    pub r: u64,
    #[serde(serialize_with = "crate::serialize_decimal")]
    pub permutations: BigUint,
    #[serde(serialize_with = "crate::serialize_decimal")]
    pub combinations: BigUint,
    pub enumeration: Option<Enumeration>,
}

/// Every selection over the items `A`, `B`, `C`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    pub items: Vec<char>,
    pub permutations: Vec<Vec<char>>,
    pub combinations: Vec<Vec<char>>,
}

impl CountingQuery {
    /// # Errors
    ///
    /// * [`CombinatoricsError::Negative`] if `n` or `r` is negative
    /// * [`CombinatoricsError::SelectionTooLarge`] if `r > n`
    /// * [`CombinatoricsError::PoolTooLarge`] if `n > MAX_COUNT_N`
    ///
    /// # Examples
    ///
    /// ```
    /// use statmaster_combinatorics::CountingQuery;
    ///
    /// let report = CountingQuery::new(4, 2).unwrap().report();
    /// assert_eq!(report.permutations.to_string(), "12");
    /// assert_eq!(report.combinations.to_string(), "6");
    /// let listed = report.enumeration.unwrap();
    /// assert_eq!(listed.items, ['A', 'B', 'C', 'D']);
    /// assert_eq!(listed.combinations.len(), 6);
    ///
    /// assert!(CountingQuery::new(2, 3).is_err());
    /// ```
    pub fn new(n: i64, r: i64) -> Result<Self, CombinatoricsError> {
        let non_negative = |name, value: i64| {
            u64::try_from(value).map_err(|_| CombinatoricsError::Negative { name, value })
        };
        let n = non_negative("n", n)?;
        let r = non_negative("r", r)?;
        if n > MAX_COUNT_N {
            return Err(CombinatoricsError::PoolTooLarge {
                n,
                max: MAX_COUNT_N,
            });
        }
        if r > n {
            return Err(CombinatoricsError::SelectionTooLarge { n, r });
        }
        Ok(Self { n, r })
    }

    #[must_use]
    pub fn can_enumerate(&self) -> bool {
        self.n <= MAX_ENUMERATION_ITEMS
    }

    /// Lists every selection, or `None` when the pool is too large.
    #[must_use]
    pub fn enumerate(&self) -> Option<Enumeration> {
        if !self.can_enumerate() {
            return None;
        }
        let items = ('A'..).take(usize::try_from(self.n).ok()?).collect::<Vec<_>>();
        let r = usize::try_from(self.r).ok()?;
        Some(Enumeration {
            permutations: generate_permutations(&items, r),
            combinations: generate_combinations(&items, r),
            items,
        })
    }

    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn report(&self) -> CountingReport {
        // `new` only accepts values that came from an i64.
        let (n, r) = (self.n as i64, self.r as i64);
        CountingReport {
            n: self.n,
            r: self.r,
            permutations: permutation(n, r),
            combinations: combination(n, r),
            enumeration: self.enumerate(),
        }
    }
}
