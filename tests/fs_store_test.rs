use clientecerto::model::Client;
use clientecerto::store::fs::FileStore;
use clientecerto::store::{ClientStore, KeyValueStore};
use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

#[test]
fn test_basic_key_value_io() {
    let (_dir, mut store) = setup();

    // 1. Write
    store.set("17", r#"{"hello":"world"}"#).unwrap();

    // 2. Read
    let value = store.get("17").unwrap();
    assert_eq!(value, Some(r#"{"hello":"world"}"#.to_string()));

    // 3. Delete
    store.remove("17").unwrap();
    assert_eq!(store.get("17").unwrap(), None);
}

#[test]
fn test_missing_directory_reads_as_empty() {
    let (_dir, store) = setup();

    // Nothing written yet, so the data directory does not even exist
    assert_eq!(store.get("1").unwrap(), None);
    assert!(store.all_keys().unwrap().is_empty());
}

#[test]
fn test_remove_absent_key_is_ok() {
    let (_dir, mut store) = setup();
    store.remove("does-not-exist").unwrap();
}

#[test]
fn test_atomic_write_artifacts() {
    let (dir, mut store) = setup();

    store.set("42", "payload").unwrap();

    // Verify file exists with the expected name
    let expected_path = dir.path().join("data").join("client-42.json");
    assert!(expected_path.exists());

    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert_eq!(on_disk, "payload");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path().join("data")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_all_keys_ignores_foreign_files() {
    let (dir, mut store) = setup();

    store.set("1", "a").unwrap();
    store.set("2", "b").unwrap();

    // config.json and stray files live in the same directory but are not entries
    fs::write(dir.path().join("data").join("config.json"), "{}").unwrap();
    fs::write(dir.path().join("data").join("notes.txt"), "hi").unwrap();

    let mut keys = store.all_keys().unwrap();
    keys.sort();
    assert_eq!(keys, vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn test_multi_get_and_multi_remove() {
    let (_dir, mut store) = setup();

    store.set("1", "a").unwrap();
    store.set("2", "b").unwrap();

    let keys = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    let values = store.multi_get(&keys).unwrap();
    assert_eq!(
        values,
        vec![
            ("1".to_string(), Some("a".to_string())),
            ("2".to_string(), Some("b".to_string())),
            ("3".to_string(), None),
        ]
    );

    store.multi_remove(&keys).unwrap();
    assert!(store.all_keys().unwrap().is_empty());
}

#[test]
fn test_client_round_trip_on_disk() {
    let (_dir, store) = setup();
    let mut clients = ClientStore::with_backend(store);

    let client = Client {
        id: 1700000000123,
        name: "João da Silva".to_string(),
        value: Decimal::from_str("123.45").unwrap(),
        tax_id: Some("11144477735".to_string()),
    };
    clients.add(&client).unwrap();

    let all = clients.get_all().unwrap();
    assert_eq!(all, vec![client]);
}

#[test]
fn test_corrupt_file_fails_the_read() {
    let (dir, store) = setup();
    let mut clients = ClientStore::with_backend(store);

    let client = Client {
        id: 1,
        name: "Maria".to_string(),
        value: Decimal::from_str("10.00").unwrap(),
        tax_id: None,
    };
    clients.add(&client).unwrap();

    fs::write(dir.path().join("data").join("client-2.json"), "{oops").unwrap();

    assert!(clients.get_all().is_err());
}

#[test]
fn test_survives_process_restart() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");

    {
        let mut clients = ClientStore::with_backend(FileStore::new(data.clone()));
        let client = Client {
            id: 9,
            name: "Ana".to_string(),
            value: Decimal::from_str("5.00").unwrap(),
            tax_id: None,
        };
        clients.add(&client).unwrap();
    }

    // A fresh store over the same directory sees the record
    let clients = ClientStore::with_backend(FileStore::new(data));
    let all = clients.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ana");
}
