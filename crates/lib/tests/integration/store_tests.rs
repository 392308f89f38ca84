use std::fs;

use docshelf_lib::{Deleted, StoreError};
use serde_json::json;

use super::common::{User, temp_store, user};

#[test]
fn users_scenario() {
  let (_temp, store) = temp_store();

  store.write("users", "a", &json!({ "name": "A" })).unwrap();

  let blobs = store.read_all("users").unwrap();
  assert_eq!(blobs.len(), 1);
  let decoded: serde_json::Value = serde_json::from_str(&blobs[0]).unwrap();
  assert_eq!(decoded, json!({ "name": "A" }));

  assert!(matches!(store.delete("users", "a").unwrap(), Deleted::Record(_)));
  assert!(matches!(
    store.read::<serde_json::Value>("users", "a"),
    Err(StoreError::NotFound(_))
  ));
}

#[test]
fn read_all_returns_n_decodable_blobs() {
  let (_temp, store) = temp_store();
  let users = vec![
    user("Mikasa", "cedar", "Bangalore"),
    user("Johan", "Google", "NYC"),
    user("Maximilian", "Microsoft", "Paris"),
    user("Reiner", "Remote", "Prague"),
    user("Eren", "Domini", "Dubai"),
    user("Erwin", "Fidelity", "Pune"),
  ];

  for u in &users {
    store.write("users", &u.name, u).unwrap();
  }

  let blobs = store.read_all("users").unwrap();
  assert_eq!(blobs.len(), users.len());

  let mut decoded: Vec<User> = blobs.iter().map(|b| serde_json::from_str(b).unwrap()).collect();
  decoded.sort_by(|a, b| a.name.cmp(&b.name));
  let mut expected = users.clone();
  expected.sort_by(|a, b| a.name.cmp(&b.name));
  assert_eq!(decoded, expected);
}

#[test]
fn records_use_pascal_case_fields_on_disk() {
  let (temp, store) = temp_store();
  store.write("users", "Johan", &user("Johan", "Google", "NYC")).unwrap();

  let content = fs::read_to_string(temp.path().join("db").join("users").join("Johan.json")).unwrap();
  assert!(content.starts_with("{\n\t\"Name\": \"Johan\""));
  assert!(content.contains("\t\"Address\": {\n\t\t\"City\": \"NYC\""));
  assert!(content.ends_with("}\n"));
  assert!(!content.ends_with("}\n\n"));
}

#[test]
fn delete_by_file_name_like_the_demo() {
  let (_temp, store) = temp_store();
  store.write("users", "Johan", &user("Johan", "Google", "NYC")).unwrap();
  store.write("users", "Erwin", &user("Erwin", "Fidelity", "Pune")).unwrap();

  store.delete("users", "Johan.json").unwrap();

  assert_eq!(store.list("users").unwrap(), vec!["Erwin"]);
}

#[test]
fn collections_are_isolated() {
  let (_temp, store) = temp_store();
  store.write("users", "1", &json!({ "kind": "user" })).unwrap();
  store.write("orders", "1", &json!({ "kind": "order" })).unwrap();

  store.delete_collection("orders").unwrap();

  assert_eq!(store.collections().unwrap(), vec!["users"]);
  assert_eq!(
    store.read::<serde_json::Value>("users", "1").unwrap(),
    json!({ "kind": "user" })
  );
}

#[test]
fn delete_then_rewrite_recreates_collection() {
  let (_temp, store) = temp_store();
  store.write("users", "a", &json!(1)).unwrap();
  store.delete("users", "").unwrap();

  store.write("users", "a", &json!(2)).unwrap();
  assert_eq!(store.read::<i64>("users", "a").unwrap(), 2);
}

#[test]
fn non_utf8_record_is_a_decode_error() {
  let (temp, store) = temp_store();
  store.write("users", "a", &json!({ "name": "A" })).unwrap();
  fs::write(temp.path().join("db").join("users").join("bad.json"), [0xff, 0xfe, b'{', b'}']).unwrap();

  assert!(matches!(
    store.read::<serde_json::Value>("users", "bad"),
    Err(StoreError::Decode { .. })
  ));
  assert!(matches!(store.read_all("users"), Err(StoreError::Decode { .. })));
}

#[cfg(unix)]
#[test]
fn unreadable_record_aborts_scan() {
  use std::os::unix::fs::PermissionsExt;

  let (temp, store) = temp_store();
  store.write("users", "a", &json!({ "name": "A" })).unwrap();
  let locked = temp.path().join("db").join("users").join("locked.json");
  fs::write(&locked, "{}").unwrap();
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

  // Permission bits are not enforced for privileged users.
  if fs::File::open(&locked).is_ok() {
    return;
  }

  assert!(matches!(store.read_all("users"), Err(StoreError::Read { .. })));
  assert!(matches!(
    store.read::<serde_json::Value>("users", "locked"),
    Err(StoreError::Read { .. })
  ));

  fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}
