//! Typed field values carried by a [`Record`](crate::Record).

use std::sync::Arc;

use url::Url;

use crate::{enumeration::EnumMember, error::ValueTypeError};

/// A coerced field value.
///
/// Absence is modelled by the record slot being empty, so there is no null
/// variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Char(char),
    String(Arc<str>),
    Uri(Url),
    Enum(&'static EnumMember),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i8(&self) -> Result<i8, ValueTypeError> {
        match self {
            Value::I8(v) => Ok(*v),
            _ => Err(self.type_mismatch("I8")),
        }
    }

    pub fn try_i16(&self) -> Result<i16, ValueTypeError> {
        match self {
            Value::I16(v) => Ok(*v),
            _ => Err(self.type_mismatch("I16")),
        }
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(*v),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(*v),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_u8(&self) -> Result<u8, ValueTypeError> {
        match self {
            Value::U8(v) => Ok(*v),
            _ => Err(self.type_mismatch("U8")),
        }
    }

    pub fn try_u16(&self) -> Result<u16, ValueTypeError> {
        match self {
            Value::U16(v) => Ok(*v),
            _ => Err(self.type_mismatch("U16")),
        }
    }

    pub fn try_u32(&self) -> Result<u32, ValueTypeError> {
        match self {
            Value::U32(v) => Ok(*v),
            _ => Err(self.type_mismatch("U32")),
        }
    }

    pub fn try_u64(&self) -> Result<u64, ValueTypeError> {
        match self {
            Value::U64(v) => Ok(*v),
            _ => Err(self.type_mismatch("U64")),
        }
    }

    pub fn try_f32(&self) -> Result<f32, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(*v),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<f64, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(*v),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_char(&self) -> Result<char, ValueTypeError> {
        match self {
            Value::Char(v) => Ok(*v),
            _ => Err(self.type_mismatch("Char")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::String(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_uri(&self) -> Result<&Url, ValueTypeError> {
        match self {
            Value::Uri(v) => Ok(v),
            _ => Err(self.type_mismatch("Uri")),
        }
    }

    pub fn try_enum(&self) -> Result<&'static EnumMember, ValueTypeError> {
        match self {
            Value::Enum(v) => Ok(*v),
            _ => Err(self.type_mismatch("Enum")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::U8(_) => "U8",
            Value::U16(_) => "U16",
            Value::U32(_) => "U32",
            Value::U64(_) => "U64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::Uri(_) => "Uri",
            Value::Enum(_) => "Enum",
        }
    }
}
