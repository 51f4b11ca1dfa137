//! Conversion between wire strings and typed [`Value`]s.

use std::{borrow::Cow, str::FromStr};

use punchout_core::{FieldType, Value};
use url::Url;

use crate::error::CoerceError;

/// Wire representation of a `true` flag. A missing flag means `false`.
pub const FLAG_MARKER: &str = "X";

/// Coerce a wire string to `field_type`.
///
/// Returns `Ok(None)` when the field should stay unset: a blank value for any
/// non-flag field, or an enumeration input that matches no member.
pub fn decode_value(raw: &str, field_type: &FieldType) -> Result<Option<Value>, CoerceError> {
    if !field_type.is_flag() && raw.trim().is_empty() {
        return Ok(None);
    }

    let value = match field_type {
        FieldType::Bool => Value::Bool(raw.eq_ignore_ascii_case(FLAG_MARKER)),
        FieldType::I8 => Value::I8(parse_integer(raw, "i8")?),
        FieldType::I16 => Value::I16(parse_integer(raw, "i16")?),
        FieldType::I32 => Value::I32(parse_integer(raw, "i32")?),
        FieldType::I64 => Value::I64(parse_integer(raw, "i64")?),
        FieldType::U8 => Value::U8(parse_integer(raw, "u8")?),
        FieldType::U16 => Value::U16(parse_integer(raw, "u16")?),
        FieldType::U32 => Value::U32(parse_integer(raw, "u32")?),
        FieldType::U64 => Value::U64(parse_integer(raw, "u64")?),
        FieldType::F32 => Value::F32(parse_float(raw)?),
        FieldType::F64 => Value::F64(parse_float(raw)?),
        FieldType::Char => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Value::Char(c),
                _ => {
                    return Err(CoerceError::InvalidChar {
                        len: raw.chars().count(),
                    });
                }
            }
        }
        FieldType::String => Value::string(raw),
        FieldType::Uri => Value::Uri(Url::parse(raw).map_err(|source| CoerceError::InvalidUri {
            raw: raw.to_string(),
            source,
        })?),
        FieldType::Enum(def) => match def.resolve(raw) {
            Some(member) => Value::Enum(member),
            None => return Ok(None),
        },
    };

    Ok(Some(value))
}

/// Render a value as its wire string.
///
/// Returns `None` for values that are never emitted, i.e. a `false` flag.
pub fn encode_value(value: &Value) -> Option<Cow<'_, str>> {
    let text = match value {
        Value::Bool(true) => Cow::Borrowed(FLAG_MARKER),
        Value::Bool(false) => return None,
        Value::I8(v) => Cow::Owned(v.to_string()),
        Value::I16(v) => Cow::Owned(v.to_string()),
        Value::I32(v) => Cow::Owned(v.to_string()),
        Value::I64(v) => Cow::Owned(v.to_string()),
        Value::U8(v) => Cow::Owned(v.to_string()),
        Value::U16(v) => Cow::Owned(v.to_string()),
        Value::U32(v) => Cow::Owned(v.to_string()),
        Value::U64(v) => Cow::Owned(v.to_string()),
        Value::F32(v) => Cow::Owned(v.to_string()),
        Value::F64(v) => Cow::Owned(v.to_string()),
        Value::Char(v) => Cow::Owned(v.to_string()),
        Value::String(v) => Cow::Borrowed(v.as_ref()),
        Value::Uri(v) => Cow::Borrowed(v.as_str()),
        Value::Enum(member) => Cow::Borrowed(member.wire_code()),
    };
    Some(text)
}

fn parse_float<T: FromStr<Err = std::num::ParseFloatError>>(
    raw: &str,
) -> Result<T, CoerceError> {
    raw.trim()
        .parse()
        .map_err(|source| CoerceError::InvalidNumber {
            raw: raw.to_string(),
            source,
        })
}

/// Plain integer renderings parse exactly, so the full 64-bit range
/// survives. Anything else goes through `f64` so decimal renderings like
/// `2.00` are accepted and truncated toward zero.
fn parse_integer<T>(raw: &str, type_name: &'static str) -> Result<T, CoerceError>
where
    T: FromStr + TryFrom<i128>,
{
    if let Ok(exact) = raw.trim().parse::<T>() {
        return Ok(exact);
    }

    let number: f64 = parse_float(raw)?;
    let out_of_range = || CoerceError::OutOfRange {
        raw: raw.to_string(),
        type_name,
    };

    if !number.is_finite() {
        return Err(out_of_range());
    }

    T::try_from(number.trunc() as i128).map_err(|_| out_of_range())
}
