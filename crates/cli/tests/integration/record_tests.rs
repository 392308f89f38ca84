use super::common::TestEnv;

#[test]
fn test_write_creates_record_file() {
  let env = TestEnv::new();
  env.write("users", "a", r#"{"name": "A"}"#);

  let content = std::fs::read_to_string(env.record_path("users", "a")).unwrap();
  assert_eq!(content, "{\n\t\"name\": \"A\"\n}\n");
}

#[test]
fn test_write_from_stdin() {
  let env = TestEnv::new();

  let output = env
    .shelf_cmd()
    .args(["write", "users", "b"])
    .write_stdin(r#"{"name": "B"}"#)
    .output()
    .unwrap();
  assert!(output.status.success());
  assert!(env.record_path("users", "b").exists());
}

#[test]
fn test_read_prints_record() {
  let env = TestEnv::new();
  env.write("users", "a", r#"{"name": "A"}"#);

  let output = env.shelf_cmd().args(["read", "users", "a"]).output().unwrap();
  assert!(output.status.success());
  assert_eq!(String::from_utf8_lossy(&output.stdout), "{\n\t\"name\": \"A\"\n}\n");
}

#[test]
fn test_read_json_output() {
  let env = TestEnv::new();
  env.write("users", "a", r#"{"name": "A"}"#);

  let output = env
    .shelf_cmd()
    .args(["read", "users", "a.json", "-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
  assert_eq!(parsed["name"], "A");
}

#[test]
fn test_read_all_json_output() {
  let env = TestEnv::new();
  env.write("users", "a", r#"{"name": "A"}"#);
  env.write("users", "b", r#"{"name": "B"}"#);

  let output = env
    .shelf_cmd()
    .args(["read-all", "users", "-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
  assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_read_all_missing_collection_fails() {
  let env = TestEnv::new();

  let output = env.shelf_cmd().args(["read-all", "ghosts"]).output().unwrap();
  assert!(!output.status.success());
}

#[test]
fn test_list_collections_and_records() {
  let env = TestEnv::new();
  env.write("users", "b", "{}");
  env.write("users", "a", "{}");
  env.write("orders", "1", "{}");

  let output = env.shelf_cmd().arg("list").output().unwrap();
  assert!(output.status.success());
  assert_eq!(String::from_utf8_lossy(&output.stdout), "orders\nusers\n");

  let output = env.shelf_cmd().args(["list", "users"]).output().unwrap();
  assert!(output.status.success());
  assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb\n");
}

#[test]
fn test_list_empty_store() {
  let env = TestEnv::new();

  let output = env.shelf_cmd().arg("list").output().unwrap();
  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stdout).contains("No collections"));
}

#[test]
fn test_delete_record() {
  let env = TestEnv::new();
  env.write("users", "a", "{}");

  let output = env.shelf_cmd().args(["delete", "users", "a"]).output().unwrap();
  assert!(output.status.success());
  assert!(!env.record_path("users", "a").exists());

  let output = env.shelf_cmd().args(["delete", "users", "a"]).output().unwrap();
  assert!(!output.status.success());
}

#[test]
fn test_drop_collection_with_force() {
  let env = TestEnv::new();
  env.write("users", "a", "{}");
  env.write("users", "b", "{}");

  let output = env
    .shelf_cmd()
    .args(["drop", "users", "--force"])
    .output()
    .unwrap();
  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stdout).contains("2 record(s)"));
  assert!(!env.root_path().join("users").exists());
}

#[test]
fn test_info_json() {
  let env = TestEnv::new();
  env.write("users", "a", r#"{"name": "A"}"#);

  let output = env.shelf_cmd().args(["info", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
  assert_eq!(parsed["collections"][0]["name"], "users");
  assert_eq!(parsed["collections"][0]["records"], 1);
  assert_eq!(parsed["collections"][0]["bytes"], 17);
}

#[test]
fn test_verbose_logs_store_creation() {
  let env = TestEnv::new();

  let output = env.shelf_cmd().args(["--verbose", "list"]).output().unwrap();
  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains("Creating the database"));
}
