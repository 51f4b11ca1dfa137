use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::enumeration::EnumDef;

/// Logical in-memory type of a catalog field.
///
/// Variant names mirror [`Value`](crate::Value) for consistency (values ↔ types).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    String,
    Uri,
    Enum(&'static EnumDef),
}

impl FieldType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldType::I8
                | FieldType::I16
                | FieldType::I32
                | FieldType::I64
                | FieldType::U8
                | FieldType::U16
                | FieldType::U32
                | FieldType::U64
        )
    }

    /// Flags are the only fields that decode an empty wire value.
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldType::Bool)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::I8 => "i8",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::I64 => "i64",
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::F32 => "f32",
            FieldType::F64 => "f64",
            FieldType::Char => "char",
            FieldType::String => "string",
            FieldType::Uri => "uri",
            FieldType::Enum(_) => "enum",
        }
    }
}

/// A single catalog entry: the logical name of a record attribute, the wire
/// key template it is carried under, and its logical type.
///
/// The template holds the item index placeholder `{n}` exactly once, e.g.
/// `QUANTITY[{n}]`. Templates are validated when a codec is built, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub template: String,
    pub field_type: FieldType,
    pub nullable: bool,
}

impl FieldDef {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        field_type: FieldType,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            field_type,
            nullable,
        }
    }
}

/// Ordered collection of [`FieldDef`]. Order defines encode emission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDefs(pub Vec<FieldDef>);

impl FieldDefs {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[FieldDef] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.0.iter()
    }

    /// Position of the field called `name`, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|field| field.name == name)
    }
}

impl From<Vec<FieldDef>> for FieldDefs {
    fn from(value: Vec<FieldDef>) -> Self {
        Self(value)
    }
}

impl From<FieldDefs> for Vec<FieldDef> {
    fn from(value: FieldDefs) -> Self {
        value.0
    }
}

impl FromIterator<FieldDef> for FieldDefs {
    fn from_iter<T: IntoIterator<Item = FieldDef>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[FieldDef]> for FieldDefs {
    fn as_ref(&self) -> &[FieldDef] {
        self.as_slice()
    }
}

impl Deref for FieldDefs {
    type Target = [FieldDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for FieldDefs {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_field_defs(self.as_slice())?;
        f.write_str(&text)
    }
}
