use std::io::Cursor;

use punchout::{ItemField, ItemType, OciSerializer, Punchout, PunchoutEntry, PunchoutError};
use punchout_codec::{ErrorPolicy, PairError};
use punchout_core::{Record, Value};
use url::Url;

fn serializer() -> OciSerializer {
    OciSerializer::new().expect("OCI catalog compiles")
}

#[test]
fn decodes_quantity_and_unit_for_one_item() -> Result<(), PunchoutError> {
    let cart = serializer()
        .deserialize_pairs([("NEW_ITEM-QUANTITY[3]", "5"), ("NEW_ITEM-UNIT[3]", "EA")])?;

    assert_eq!(cart.entries.len(), 1);
    let entry = &cart.entries[0];
    assert_eq!(entry.id, 3);
    assert_eq!(entry.quantity, 5);
    assert_eq!(entry.unit.as_deref(), Some("EA"));
    assert_eq!(entry.price_unit, 1);
    assert!(!entry.is_service);
    Ok(())
}

#[test]
fn encodes_single_record_in_catalog_order() {
    let mut record = Record::new(3, ItemField::ALL.len());
    record.set(ItemField::Unit.index(), Value::string("EA"));
    record.set(ItemField::Quantity.index(), Value::I32(5));

    assert_eq!(
        serializer().codec().encode(&[record]),
        "NEW_ITEM-QUANTITY[3]=5&NEW_ITEM-UNIT[3]=EA"
    );
}

#[test]
fn entry_always_emits_quantity_and_price_unit() {
    let mut entry = PunchoutEntry::new(1);
    entry.unit = Some("EA".to_string());

    assert_eq!(
        serializer().serialize_entries(&[entry]),
        "NEW_ITEM-QUANTITY[1]=0&NEW_ITEM-UNIT[1]=EA&NEW_ITEM-PRICEUNIT[1]=1"
    );
}

#[test]
fn numeric_truncation_on_decode() -> Result<(), PunchoutError> {
    let cart = serializer().deserialize_body("NEW_ITEM-QUANTITY[1]=3.00&NEW_ITEM-PRICEUNIT[1]=10.9")?;
    assert_eq!(cart.entries[0].quantity, 3);
    assert_eq!(cart.entries[0].price_unit, 10);
    Ok(())
}

#[test]
fn service_flag_is_asymmetric() -> Result<(), PunchoutError> {
    let serializer = serializer();

    let cart = serializer.deserialize_body("NEW_ITEM-QUANTITY[1]=1")?;
    assert!(!cart.entries[0].is_service);

    let mut entry = PunchoutEntry::new(1);
    entry.is_service = false;
    assert!(!serializer.serialize_entries(&[entry.clone()]).contains("SERVICE"));

    entry.is_service = true;
    assert!(serializer.serialize_entries(&[entry]).contains("NEW_ITEM-SERVICE[1]=X"));
    Ok(())
}

#[test]
fn item_type_uses_external_code_both_ways() -> Result<(), PunchoutError> {
    let serializer = serializer();
    let cart = serializer.deserialize_body("NEW_ITEM-ITEM_TYPE[1]=R&NEW_ITEM-PARENT_ID[2]=1&NEW_ITEM-ITEM_TYPE[2]=l")?;

    assert_eq!(cart.entries[0].item_type, Some(ItemType::Root));
    // Lowercase "l" is neither an external code nor a member name.
    assert_eq!(cart.entries[1].item_type, None);
    assert_eq!(cart.entries[1].parent_id, Some(1));

    let body = serializer.serialize(&cart);
    assert!(body.contains("NEW_ITEM-ITEM_TYPE[1]=R"));
    Ok(())
}

#[test]
fn attachment_title_falls_back_to_url() -> Result<(), Box<dyn std::error::Error>> {
    let mut entry = PunchoutEntry::new(2);
    entry.attachment_url = Some(Url::parse("https://example.com/spec.pdf")?);
    assert_eq!(entry.attachment_title(), Some("https://example.com/spec.pdf"));

    let body = serializer().serialize_entries(&[entry.clone()]);
    assert!(body.contains(
        "NEW_ITEM-ATTACHMENT_TITLE[2]=https%3A%2F%2Fexample.com%2Fspec.pdf"
    ));

    entry.attachment_title = Some("Datasheet".to_string());
    assert_eq!(entry.attachment_title(), Some("Datasheet"));
    Ok(())
}

#[test]
fn full_entry_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let mut entry = PunchoutEntry::new(1);
    entry.description = Some("Office chair, black".to_string());
    entry.material_number = Some("MAT-100".to_string());
    entry.quantity = 4;
    entry.unit = Some("PCE".to_string());
    entry.price = Some(149.5);
    entry.currency = Some("EUR".to_string());
    entry.price_unit = 1;
    entry.lead_time = Some(14);
    entry.long_text = Some("Ergonomic & adjustable".to_string());
    entry.vendor = Some("V-42".to_string());
    entry.is_service = true;
    entry.attachment_url = Some(Url::parse("https://example.com/chair.pdf")?);
    entry.attachment_title = Some("Chair datasheet".to_string());
    entry.attachment_purpose = Some('C');
    entry.custom_field_3 = Some("cost center 7".to_string());
    entry.item_type = Some(ItemType::Leaf);
    entry.parent_id = Some(0);

    let mut second = PunchoutEntry::new(2);
    second.quantity = 1;

    let serializer = serializer();
    let body = serializer.serialize_entries(&[entry.clone(), second.clone()]);
    let cart = serializer.deserialize_body(&body)?;

    assert_eq!(cart.entries, vec![entry, second]);
    Ok(())
}

#[test]
fn empty_cart_serializes_to_empty_body() {
    assert_eq!(serializer().serialize(&Punchout::new()), "");
}

#[test]
fn deserialize_reader_reads_stream() -> Result<(), PunchoutError> {
    let cart = serializer().deserialize_reader(Cursor::new(
        "NEW_ITEM-DESCRIPTION[1]=Paper+A4&NEW_ITEM-PRICE[1]=4.99\r\n",
    ))?;
    assert_eq!(cart.entries[0].description.as_deref(), Some("Paper A4"));
    assert_eq!(cart.entries[0].price, Some(4.99));
    Ok(())
}

#[test]
fn aborting_serializer_reports_bad_pair() -> Result<(), PunchoutError> {
    let serializer = OciSerializer::with_error_policy(ErrorPolicy::Abort)?;
    let err = serializer
        .deserialize_body("NEW_ITEM-ATTACHMENT_PURPOSE[1]=CONFIG")
        .unwrap_err();
    assert!(matches!(err, PunchoutError::Pair(PairError::Coerce { .. })));
    Ok(())
}

#[test]
fn record_with_wrong_value_type_is_rejected() {
    let mut record = Record::new(1, ItemField::ALL.len());
    record.set(ItemField::Quantity.index(), Value::string("five"));

    let err = PunchoutEntry::from_record(&record).unwrap_err();
    assert!(matches!(
        err,
        PunchoutError::EntryField { id: 1, field: "quantity", .. }
    ));
}

#[test]
fn cart_json_uses_snake_case_names() -> Result<(), Box<dyn std::error::Error>> {
    let mut entry = PunchoutEntry::new(1);
    entry.item_type = Some(ItemType::Outline);
    let cart = Punchout::with_entries(vec![entry]);

    let json = serde_json::to_value(&cart)?;
    assert!(json["created_at"].is_string());
    assert_eq!(json["entries"][0]["price_unit"], 1);
    assert_eq!(json["entries"][0]["item_type"], "outline");

    let parsed: Punchout = serde_json::from_value(json)?;
    assert_eq!(parsed, cart);
    Ok(())
}

#[test]
fn cart_json_fills_defaults() -> Result<(), serde_json::Error> {
    let cart: Punchout = serde_json::from_str(r#"{"entries":[{"id":5,"quantity":2}]}"#)?;
    assert_eq!(cart.entries[0].id, 5);
    assert_eq!(cart.entries[0].quantity, 2);
    assert_eq!(cart.entries[0].price_unit, 1);
    Ok(())
}
