/// Counting arguments outside their domain.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CombinatoricsError {
    #[display("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i64 },
    #[display("cannot choose {r} items from {n}")]
    SelectionTooLarge { n: u64, r: u64 },
    #[display("pool of {n} items is too large, at most {max} are supported")]
    PoolTooLarge { n: u64, max: u64 },
}
