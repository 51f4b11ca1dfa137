//! Declarative field catalog for indexed form records.

mod format;
mod types;

pub use format::format_field_defs;
pub use types::{FieldDef, FieldDefs, FieldType};
