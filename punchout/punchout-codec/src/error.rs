//! Error types for template compilation and pair decoding.

use std::num::{ParseFloatError, ParseIntError};

/// A field template that cannot be compiled into a key matcher.
///
/// Raised while building a [`FormCodec`](crate::FormCodec), never during decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("template '{template}' of field '{field}' has no '{{n}}' index placeholder")]
    MissingPlaceholder { field: String, template: String },

    #[error(
        "template '{template}' of field '{field}' has {count} '{{n}}' index placeholders, expected one"
    )]
    MultiplePlaceholders {
        field: String,
        template: String,
        count: usize,
    },
}

/// A wire value that cannot be coerced to its field's logical type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoerceError {
    #[error("'{raw}' is not a number: {source}")]
    InvalidNumber {
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("'{raw}' does not fit in {type_name}")]
    OutOfRange { raw: String, type_name: &'static str },

    #[error("expected a single character, got {len} characters")]
    InvalidChar { len: usize },

    #[error("'{raw}' is not a valid URI: {source}")]
    InvalidUri {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

/// A single wire pair that matched a field but could not be applied.
///
/// Under [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip) these are logged and
/// the pair is dropped; decode carries on with the next pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairError {
    #[error("malformed item index '{index}' in key '{key}': {source}")]
    MalformedIndex {
        key: String,
        index: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot decode field '{field}' from key '{key}': {source}")]
    Coerce {
        key: String,
        field: String,
        #[source]
        source: CoerceError,
    },
}

/// Errors from decoding a whole form body read from a stream.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// I/O error while reading the body, including bodies that are not UTF-8.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pair(#[from] PairError),
}
