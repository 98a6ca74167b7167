use serde::Serialize;

/// Failure of a statistics computation.
///
/// Every engine entry point returns this instead of panicking so the caller
/// can show a message and simply recompute on the next input change.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::Display, derive_more::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsError {
    #[display("no numeric data to analyze")]
    EmptyData,
    #[display("at least {required} values are required, got {actual}")]
    InsufficientData { required: u64, actual: u64 },
    #[display("all values are identical; classes cannot be formed from a zero range")]
    ConstantData,
    #[display("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl StatsError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), Self> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(idx) => Err(Self::invalid(format!(
                "value at index {idx} is not a finite number"
            ))),
            None => Ok(()),
        }
    }
}
