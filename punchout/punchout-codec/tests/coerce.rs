
use punchout_codec::{CoerceError, decode_value, encode_value};
use punchout_core::{FieldType, Value};
use test_helpers::ITEM_TYPE;

#[test]
fn blank_values_leave_non_flag_fields_unset() -> Result<(), CoerceError> {
    assert_eq!(decode_value("", &FieldType::String)?, None);
    assert_eq!(decode_value("   ", &FieldType::I32)?, None);
    assert_eq!(decode_value("", &FieldType::Uri)?, None);
    assert_eq!(decode_value("", &FieldType::Enum(&ITEM_TYPE))?, None);
    Ok(())
}

#[test]
fn string_is_identity() -> Result<(), CoerceError> {
    assert_eq!(decode_value(" EA ", &FieldType::String)?, Some(Value::string(" EA ")));
    Ok(())
}

#[test]
fn integers_are_truncated_from_decimal_renderings() -> Result<(), CoerceError> {
    assert_eq!(decode_value("3.00", &FieldType::I32)?, Some(Value::I32(3)));
    assert_eq!(decode_value("2.99", &FieldType::U8)?, Some(Value::U8(2)));
    assert_eq!(decode_value("-7.9", &FieldType::I64)?, Some(Value::I64(-7)));
    assert_eq!(decode_value(" 42 ", &FieldType::U32)?, Some(Value::U32(42)));
    Ok(())
}

#[test]
fn plain_integers_keep_full_64_bit_precision() -> Result<(), CoerceError> {
    assert_eq!(
        decode_value("9223372036854775807", &FieldType::I64)?,
        Some(Value::I64(i64::MAX))
    );
    assert_eq!(
        decode_value("18446744073709551615", &FieldType::U64)?,
        Some(Value::U64(u64::MAX))
    );
    assert_eq!(
        decode_value("9007199254740993", &FieldType::I64)?,
        Some(Value::I64(9_007_199_254_740_993))
    );
    assert!(matches!(
        decode_value("18446744073709551616", &FieldType::U64),
        Err(CoerceError::OutOfRange { type_name: "u64", .. })
    ));
    Ok(())
}

#[test]
fn integer_out_of_range_is_an_error() {
    let err = decode_value("300", &FieldType::U8).unwrap_err();
    assert!(matches!(err, CoerceError::OutOfRange { type_name: "u8", .. }));

    let err = decode_value("-1", &FieldType::U16).unwrap_err();
    assert!(matches!(err, CoerceError::OutOfRange { .. }));

    let err = decode_value("NaN", &FieldType::I32).unwrap_err();
    assert!(matches!(err, CoerceError::OutOfRange { .. }));
}

#[test]
fn non_numeric_input_is_an_error() {
    let err = decode_value("five", &FieldType::I32).unwrap_err();
    assert!(matches!(err, CoerceError::InvalidNumber { .. }));

    let err = decode_value("1,5", &FieldType::F32).unwrap_err();
    assert!(matches!(err, CoerceError::InvalidNumber { .. }));
}

#[test]
fn floats_parse_directly() -> Result<(), CoerceError> {
    assert_eq!(decode_value("12.5", &FieldType::F32)?, Some(Value::F32(12.5)));
    assert_eq!(decode_value("0.125", &FieldType::F64)?, Some(Value::F64(0.125)));
    Ok(())
}

#[test]
fn flag_marker_is_case_insensitive() -> Result<(), CoerceError> {
    assert_eq!(decode_value("X", &FieldType::Bool)?, Some(Value::Bool(true)));
    assert_eq!(decode_value("x", &FieldType::Bool)?, Some(Value::Bool(true)));
    Ok(())
}

#[test]
fn anything_but_the_flag_marker_is_false() -> Result<(), CoerceError> {
    assert_eq!(decode_value("", &FieldType::Bool)?, Some(Value::Bool(false)));
    assert_eq!(decode_value("true", &FieldType::Bool)?, Some(Value::Bool(false)));
    assert_eq!(decode_value("XX", &FieldType::Bool)?, Some(Value::Bool(false)));
    Ok(())
}

#[test]
fn char_requires_exactly_one_character() -> Result<(), CoerceError> {
    assert_eq!(decode_value("C", &FieldType::Char)?, Some(Value::Char('C')));
    assert_eq!(decode_value("é", &FieldType::Char)?, Some(Value::Char('é')));

    let err = decode_value("CD", &FieldType::Char).unwrap_err();
    assert_eq!(err, CoerceError::InvalidChar { len: 2 });
    Ok(())
}

#[test]
fn uri_must_be_absolute_and_well_formed() -> Result<(), Box<dyn std::error::Error>> {
    let Some(Value::Uri(url)) = decode_value("https://example.com/spec.pdf", &FieldType::Uri)?
    else {
        panic!("expected a URI value");
    };
    assert_eq!(url.as_str(), "https://example.com/spec.pdf");

    let err = decode_value("not a uri", &FieldType::Uri).unwrap_err();
    assert!(matches!(err, CoerceError::InvalidUri { .. }));
    Ok(())
}

#[test]
fn enum_resolves_external_code_then_name() -> Result<(), CoerceError> {
    let field_type = FieldType::Enum(&ITEM_TYPE);
    assert_eq!(decode_value("R", &field_type)?, Some(Value::Enum(&ITEM_TYPE.members[0])));
    assert_eq!(decode_value("leaf", &field_type)?, Some(Value::Enum(&ITEM_TYPE.members[2])));
    Ok(())
}

#[test]
fn unknown_enum_input_is_unset_not_an_error() -> Result<(), CoerceError> {
    assert_eq!(decode_value("Z", &FieldType::Enum(&ITEM_TYPE))?, None);
    Ok(())
}

#[test]
fn encode_flags_emit_marker_or_nothing() {
    assert_eq!(encode_value(&Value::Bool(true)).as_deref(), Some("X"));
    assert_eq!(encode_value(&Value::Bool(false)), None);
}

#[test]
fn encode_enum_uses_external_code() {
    let value = Value::Enum(&ITEM_TYPE.members[0]);
    assert_eq!(encode_value(&value).as_deref(), Some("R"));
}

#[test]
fn encode_scalars_use_natural_string_form() {
    assert_eq!(encode_value(&Value::I32(5)).as_deref(), Some("5"));
    assert_eq!(encode_value(&Value::F32(5.0)).as_deref(), Some("5"));
    assert_eq!(encode_value(&Value::F64(12.75)).as_deref(), Some("12.75"));
    assert_eq!(encode_value(&Value::Char('C')).as_deref(), Some("C"));
    assert_eq!(encode_value(&Value::string("EA")).as_deref(), Some("EA"));
}
