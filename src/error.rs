//! Error types for the Rctau circuit core.
//!
//! The core has a single failure mode: a mutator was handed a value
//! outside the parameter's documented closed interval. The state is left
//! untouched and the caller (the presentation layer) decides how to
//! surface the rejection.

use thiserror::Error;

use crate::circuit::Param;

/// Result type alias using [`RcError`].
pub type Result<T> = std::result::Result<T, RcError>;

/// Unified error type for all Rctau operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RcError {
    /// A parameter value fell outside its valid closed interval.
    ///
    /// Non-finite values (NaN, ±∞) are outside every closed interval and
    /// are reported through this variant as well.
    #[error("{param} value {value} is outside the valid range [{min}, {max}] {unit}")]
    RangeError {
        param: Param,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },
}

impl RcError {
    /// Create a range error for `param`, filling in its bounds and unit.
    pub fn range(param: Param, value: f64) -> Self {
        Self::RangeError {
            param,
            value,
            min: param.min(),
            max: param.max(),
            unit: param.unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = RcError::range(Param::Resistance, 10001.0);
        assert_eq!(
            err.to_string(),
            "resistance value 10001 is outside the valid range [1, 10000] Ω"
        );
    }
}
