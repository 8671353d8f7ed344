use nexstaff_core::{FieldValue, Fields, Record};
use serde_json::json;

fn sample_record() -> Record {
    let fields: Fields = [
        ("name".to_string(), FieldValue::text("Priya Raman")),
        ("experience_years".to_string(), FieldValue::number(7)),
        (
            "skills".to_string(),
            FieldValue::list(["GAAP", "Excel"]),
        ),
    ]
    .into();
    Record::new(1, fields)
}

#[test]
fn record_serializes_as_one_flat_object() {
    let value = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Priya Raman",
            "experience_years": 7,
            "skills": ["GAAP", "Excel"]
        })
    );
}

#[test]
fn record_deserializes_from_flat_object() {
    let parsed: Record = serde_json::from_value(json!({
        "id": 4,
        "name": "James Park",
        "department": "Finance"
    }))
    .unwrap();

    assert_eq!(parsed.id, 4);
    assert_eq!(parsed.text("name"), Some("James Park"));
    assert_eq!(parsed.text("department"), Some("Finance"));
}

#[test]
fn record_without_id_fails_to_deserialize() {
    let result: Result<Record, _> = serde_json::from_value(json!({"name": "No Id"}));
    assert!(result.is_err());
}

#[test]
fn constructor_strips_id_key_from_the_field_map() {
    let fields: Fields = [
        ("id".to_string(), FieldValue::number(99)),
        ("name".to_string(), FieldValue::text("Kept")),
    ]
    .into();
    let record = Record::new(7, fields);

    assert_eq!(record.id, 7);
    assert!(record.get("id").is_none());
    assert_eq!(record.text("name"), Some("Kept"));
}

#[test]
fn typed_accessors_reject_mismatched_kinds() {
    let record = sample_record();

    assert_eq!(record.text("experience_years"), None);
    assert_eq!(record.number("name"), None);
    assert_eq!(record.list("name"), None);
    assert_eq!(record.text("nonexistent"), None);
}

#[test]
fn field_value_round_trips_each_kind() {
    let fields: Fields = [
        ("a".to_string(), FieldValue::number(-3)),
        ("b".to_string(), FieldValue::text("text")),
        ("c".to_string(), FieldValue::list(["x", "y"])),
    ]
    .into();
    let record = Record::new(1, fields);

    let encoded = serde_json::to_string(&record).unwrap();
    let decoded: Record = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, record);
}
