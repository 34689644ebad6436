use super::*;
use crate::util::storage::MemoryStorage;

const KEY: &str = "solus-waitlist";

fn entry(email: &str) -> WaitlistEntry {
    WaitlistEntry::unsynced(email, "2025-01-01T00:00:00.000Z".to_owned(), "solus-foods-landing")
}

#[test]
fn empty_store_loads_empty_list() {
    let list = WaitlistStore::new(MemoryStorage::new(), KEY);
    assert!(list.load().is_empty());
    assert_eq!(list.count(), 0);
}

#[test]
fn record_appends_in_order() {
    let list = WaitlistStore::new(MemoryStorage::new(), KEY);
    assert_eq!(list.record(entry("a@x.io")), Ok(true));
    assert_eq!(list.record(entry("b@x.io")), Ok(true));
    let emails: Vec<_> = list.load().into_iter().map(|e| e.email).collect();
    assert_eq!(emails, ["a@x.io", "b@x.io"]);
}

#[test]
fn duplicate_email_is_stored_once() {
    let list = WaitlistStore::new(MemoryStorage::new(), KEY);
    assert_eq!(list.record(entry("a@x.io")), Ok(true));
    assert_eq!(list.record(entry("a@x.io")), Ok(false));
    assert_eq!(list.count(), 1);
    assert!(list.contains("a@x.io"));
    assert!(!list.contains("A@x.io"));
}

#[test]
fn stored_json_uses_expected_field_names() {
    let storage = MemoryStorage::new();
    let list = WaitlistStore::new(storage.clone(), KEY);
    list.record(entry("a@x.io")).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&storage.get(KEY).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{
            "email": "a@x.io",
            "timestamp": "2025-01-01T00:00:00.000Z",
            "source": "solus-foods-landing",
            "synced": false
        }])
    );
}

#[test]
fn corrupt_list_reads_as_empty_and_is_replaced_on_write() {
    let storage = MemoryStorage::new();
    storage.set(KEY, "not json").unwrap();
    let list = WaitlistStore::new(storage, KEY);
    assert!(!list.contains("a@x.io"));
    assert_eq!(list.record(entry("a@x.io")), Ok(true));
    assert_eq!(list.count(), 1);
}

#[test]
fn write_failure_is_reported() {
    let list = WaitlistStore::new(MemoryStorage::read_only(), KEY);
    assert!(list.record(entry("a@x.io")).is_err());
}

#[test]
fn unsynced_filters_confirmed_entries() {
    let list = WaitlistStore::new(MemoryStorage::new(), KEY);
    list.record(entry("a@x.io")).unwrap();
    list.record(WaitlistEntry { synced: true, ..entry("b@x.io") }).unwrap();
    let unsynced: Vec<_> = list.unsynced().into_iter().map(|e| e.email).collect();
    assert_eq!(unsynced, ["a@x.io"]);
    assert_eq!(list.export().len(), 2);
}

#[test]
fn migrate_legacy_merges_and_removes_old_key() {
    let storage = MemoryStorage::new();
    storage
        .set(
            "solusWaitlist",
            r#"[{"email":"old@x.io","timestamp":"2024-05-01T00:00:00.000Z","source":"solus-foods-landing"},
                {"email":"a@x.io","timestamp":"2024-05-02T00:00:00.000Z","source":"solus-foods-landing"}]"#,
        )
        .unwrap();
    let list = WaitlistStore::new(storage.clone(), KEY);
    list.record(entry("a@x.io")).unwrap();

    assert_eq!(list.migrate_legacy("solusWaitlist"), Ok(1));
    assert_eq!(storage.get("solusWaitlist"), None);

    let entries = list.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].email, "old@x.io");
    assert!(!entries[1].synced);
}

#[test]
fn migrate_legacy_without_old_key_is_noop() {
    let list = WaitlistStore::new(MemoryStorage::new(), KEY);
    assert_eq!(list.migrate_legacy("solusWaitlist"), Ok(0));
    assert_eq!(list.migrate_legacy(KEY), Ok(0));
}
