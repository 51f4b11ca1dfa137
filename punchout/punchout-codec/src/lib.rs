//! Codec engine for indexed punchout form fields.
//!
//! A [`FormCodec`] is built once per field catalog. Building compiles every
//! field's key template into an [`IndexTemplate`]; the codec is immutable
//! afterwards and can be shared freely between threads.
//!
//! # Pipeline
//!
//! ```text
//! decode:  body / reader ─ split_form_body ─┐
//!          (key, value) pairs ──────────────┴─ IndexTemplate::match_key
//!                                               └─ decode_value → Record (grouped by index)
//!
//! encode:  Record ─ encode_value ─ IndexTemplate::render ─ "&"-joined body
//! ```
//!
//! # Typical Flow
//! ```rust
//! use punchout_codec::FormCodec;
//! use punchout_core::{FieldDef, FieldType};
//!
//! let codec = FormCodec::new(vec![
//!     FieldDef::new("quantity", "QUANTITY[{n}]", FieldType::I32, false),
//!     FieldDef::new("unit", "UNIT[{n}]", FieldType::String, true),
//! ])?;
//! let records = codec.decode_pairs([("NEW_ITEM-QUANTITY[3]", "5"), ("NEW_ITEM-UNIT[3]", "EA")])?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(codec.encode(&records), "NEW_ITEM-QUANTITY[3]=5&NEW_ITEM-UNIT[3]=EA");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod coerce;
mod error;
mod form;
mod template;

pub use codec::{ErrorPolicy, FormCodec, FormCodecBuilder, ITEM_MARKER};
pub use coerce::{FLAG_MARKER, decode_value, encode_value};
pub use error::{CoerceError, DecodeError, PairError, PatternError};
pub use form::split_form_body;
pub use template::{INDEX_PLACEHOLDER, IndexTemplate};
