use punchout_core::{EnumDef, EnumMember, Record, Value};
use url::Url;

static ITEM_TYPE_MEMBERS: [EnumMember; 1] = [EnumMember::with_code("Root", "R")];
static ITEM_TYPE: EnumDef = EnumDef::new("ItemType", &ITEM_TYPE_MEMBERS);

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn typed_accessors_return_held_value() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(Value::I32(5).try_i32()?, 5);
    assert!(Value::Bool(true).try_bool()?);
    assert_eq!(Value::Char('C').try_char()?, 'C');
    assert_eq!(Value::string("EA").try_str()?, "EA");
    assert_eq!(Value::Enum(&ITEM_TYPE.members[0]).try_enum()?.name, "Root");

    let url = Url::parse("https://example.com/a.pdf")?;
    assert_eq!(Value::Uri(url.clone()).try_uri()?, &url);
    Ok(())
}

#[test]
fn typed_accessor_reports_mismatch() {
    let err = Value::F32(1.5).try_i32().unwrap_err();
    assert_eq!(err.expected, "I32");
    assert_eq!(err.actual, "F32");
    assert_eq!(err.to_string(), "value type mismatch: expected I32, got F32");
}

#[test]
fn new_record_has_empty_slots() {
    let record = Record::new(3, 4);
    assert_eq!(record.id(), 3);
    assert_eq!(record.values().len(), 4);
    assert!(record.is_empty());
    assert_eq!(record.get(0), None);
    assert_eq!(record.get(10), None);
}

#[test]
fn record_set_and_replace() {
    let mut record = Record::new(1, 2);
    record.set(0, Value::I32(5));
    record.set(1, Value::string("EA"));
    assert_eq!(record.len(), 2);
    assert_eq!(record.get(0), Some(&Value::I32(5)));

    record.replace(0, None);
    assert_eq!(record.get(0), None);
    assert_eq!(record.len(), 1);
}

#[test]
fn record_set_grows_beyond_initial_width() {
    let mut record = Record::new(1, 0);
    record.replace(2, None);
    assert!(record.values().is_empty());

    record.set(2, Value::Bool(true));
    assert_eq!(record.values().len(), 3);
    assert_eq!(record.get(2), Some(&Value::Bool(true)));
}
