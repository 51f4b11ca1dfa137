//! Error types for the OCI serializer.

use punchout_codec::{DecodeError, PairError, PatternError};
use punchout_core::ValueTypeError;

/// Errors produced by [`OciSerializer`](crate::OciSerializer).
#[derive(Debug, thiserror::Error)]
pub enum PunchoutError {
    /// The line-item catalog could not be compiled.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A pair was rejected while decoding under an aborting error policy.
    #[error(transparent)]
    Pair(#[from] PairError),

    /// The form body could not be read.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A decoded record held a value of the wrong type for an entry field.
    #[error("item {id}: field '{field}': {source}")]
    EntryField {
        id: u32,
        field: &'static str,
        #[source]
        source: ValueTypeError,
    },
}
