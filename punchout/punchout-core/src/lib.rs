//! Wire-format-agnostic core types for `punchout`.
//!
//! This crate provides the field catalog ([`FieldDefs`] / [`FieldType`]),
//! external-code tables for enumerations ([`EnumDef`]) and the typed
//! intermediate representation ([`Value`] / [`Record`]) that the codec
//! produces on decode and consumes on encode.

mod catalog;
mod enumeration;
mod error;
mod record;
mod value;

pub use catalog::{FieldDef, FieldDefs, FieldType, format_field_defs};
pub use enumeration::{EnumDef, EnumMember};
pub use error::ValueTypeError;
pub use record::Record;
pub use value::Value;
