//! Exact counting of arrangements and selections.
//!
//! Factorials, permutations and combinations are computed on [`BigUint`] so
//! results never overflow; [`to_f64_lossy`] converts them for display when
//! exactness is not needed.
//!
//! ```
//! use num_bigint::BigUint;
//! use statmaster_combinatorics::{combination, permutation};
//!
//! assert_eq!(permutation(5, 3), BigUint::from(60_u32));
//! assert_eq!(combination(5, 3), BigUint::from(10_u32));
//! ```
//!
//! Small pools can also be enumerated:
//!
//! ```
//! use statmaster_combinatorics::generate_combinations;
//!
//! let pairs = generate_combinations(&['A', 'B', 'C'], 2);
//! assert_eq!(pairs, vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
//! ```

use num_bigint::BigUint;

pub use self::{count::*, enumerate::*, error::CombinatoricsError, query::*};

mod count;
mod enumerate;
mod error;
mod query;

/// Serializes a big integer as its decimal string.
pub(crate) fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(value)
}
