//! Error types for typed value access.

/// Returned when a [`Value`](crate::Value) is read as a type it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value type mismatch: expected {expected}, got {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: String,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
