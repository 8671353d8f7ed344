use nexstaff_core::service::directory::default_employees;
use nexstaff_core::{FieldValue, Fields, MemorySlotStore, Record, RecordStore};

fn fields(entries: &[(&str, FieldValue)]) -> Fields {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn create_assigns_strictly_increasing_ids_from_one() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.empty", Vec::new());

    let mut ids = Vec::new();
    for n in 0..5 {
        let record = store
            .create(fields(&[("name", FieldValue::text(format!("rec-{n}")))]))
            .unwrap();
        ids.push(record.id);
    }

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn create_and_get_by_id_roundtrip() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.roundtrip", Vec::new());

    let payload = fields(&[
        ("name", FieldValue::text("Nora Quist")),
        ("skills", FieldValue::list(["Sourcing", "Interviews"])),
        ("experience_years", FieldValue::number(3)),
    ]);
    let created = store.create(payload.clone()).unwrap();

    let loaded = store.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, Record::new(created.id, payload));
}

#[test]
fn computed_id_wins_over_caller_supplied_id() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.idwins", Vec::new());

    let created = store
        .create(fields(&[
            ("id", FieldValue::number(99)),
            ("name", FieldValue::text("Impostor")),
        ]))
        .unwrap();

    assert_eq!(created.id, 1);
    assert!(created.get("id").is_none());
    assert!(store.get_by_id(99).unwrap().is_none());
}

#[test]
fn update_merges_patch_and_preserves_other_fields() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.update", Vec::new());

    let created = store
        .create(fields(&[
            ("name", FieldValue::text("Old Name")),
            ("department", FieldValue::text("Operations")),
            ("phone", FieldValue::text("(555) 000-0000")),
        ]))
        .unwrap();

    let updated = store
        .update(created.id, fields(&[("name", FieldValue::text("New Name"))]))
        .unwrap()
        .unwrap();

    assert_eq!(updated.text("name"), Some("New Name"));
    assert_eq!(updated.text("department"), Some("Operations"));
    assert_eq!(updated.text("phone"), Some("(555) 000-0000"));

    let reloaded = store.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[test]
fn update_cannot_change_the_id() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.updateid", Vec::new());

    let created = store
        .create(fields(&[("name", FieldValue::text("Stable"))]))
        .unwrap();

    let updated = store
        .update(created.id, fields(&[("id", FieldValue::number(42))]))
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert!(updated.get("id").is_none());
}

#[test]
fn update_missing_record_returns_none_and_writes_nothing() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.updatemiss", Vec::new());
    store
        .create(fields(&[("name", FieldValue::text("Only"))]))
        .unwrap();
    let before = store.get_all().unwrap();

    let result = store
        .update(777, fields(&[("name", FieldValue::text("Ghost"))]))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.get_all().unwrap(), before);
}

#[test]
fn delete_then_get_by_id_is_absent() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.delete", Vec::new());

    let created = store
        .create(fields(&[("name", FieldValue::text("Short Lived"))]))
        .unwrap();
    store.delete(created.id).unwrap();

    assert!(store.get_by_id(created.id).unwrap().is_none());
}

#[test]
fn delete_nonexistent_id_is_idempotent() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.deletemiss", Vec::new());
    store
        .create(fields(&[("name", FieldValue::text("Keeper"))]))
        .unwrap();
    let before = store.get_all().unwrap();

    store.delete(404).unwrap();
    store.delete(404).unwrap();

    assert_eq!(store.get_all().unwrap(), before);
}

#[test]
fn deleted_maximum_id_is_reused_by_next_create() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.idreuse", default_employees());

    let first = store
        .create(fields(&[("name", FieldValue::text("X"))]))
        .unwrap();
    assert_eq!(first.id, 5);

    store.delete(5).unwrap();

    let second = store
        .create(fields(&[("name", FieldValue::text("Y"))]))
        .unwrap();
    assert_eq!(second.id, 5);
    assert_eq!(second.text("name"), Some("Y"));
}

#[test]
fn id_gap_in_the_middle_does_not_affect_next_id() {
    let storage = MemorySlotStore::new();
    let store = RecordStore::new(&storage, "test.idgap", default_employees());

    store.delete(2).unwrap();

    let created = store
        .create(fields(&[("name", FieldValue::text("After Gap"))]))
        .unwrap();
    assert_eq!(created.id, 5);
}
