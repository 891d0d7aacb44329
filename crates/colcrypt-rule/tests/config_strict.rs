#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use colcrypt_rule::config;

fn expect_code(yaml: &str, code: &str) -> String {
    let err = config::load_from_str(yaml).expect_err("must fail");
    assert_eq!(err.code().as_str(), code, "{err}");
    err.to_string()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
tables:
  - name: user
    encryptor:
      type: tagged
      colums: [ssn] # typo should fail
"#;
    expect_code(bad, "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
tables:
  - name: user
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.tables[0].name, "user");
    assert!(cfg.tables[0].encryptor.is_none());
    assert!(cfg.default_encryptor.is_none());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
default_encryptor:
  type: tagged
  columns: [ssn]
tables:
  - name: user
    encryptor:
      type: tagged_assisted
      columns: [ssn, phone]
      assisted_query_columns: [ssn_idx, phone_idx]
      props: { tag: "k1" }
  - name: order
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let e = cfg.tables[0].encryptor.as_ref().unwrap();
    assert_eq!(e.encryptor_type, "tagged_assisted");
    assert_eq!(e.assisted_query_columns, ["ssn_idx", "phone_idx"]);
    assert_eq!(e.props.get("tag").map(String::as_str), Some("k1"));
    assert!(cfg.default_encryptor.as_ref().unwrap().props.is_empty());
}

#[test]
fn unsupported_version() {
    expect_code("version: 2\n", "UNSUPPORTED_VERSION");
}

#[test]
fn duplicate_tables_rejected() {
    let bad = r#"
version: 1
tables:
  - name: user
  - name: user
"#;
    let msg = expect_code(bad, "BAD_CONFIG");
    assert!(msg.contains("user"));
}

#[test]
fn empty_columns_rejected() {
    let bad = r#"
version: 1
tables:
  - name: user
    encryptor: { type: tagged, columns: [] }
"#;
    let msg = expect_code(bad, "BAD_CONFIG");
    assert!(msg.contains("user"));
}

#[test]
fn assisted_columns_must_pair_with_columns() {
    let bad = r#"
version: 1
tables:
  - name: user
    encryptor:
      type: tagged_assisted
      columns: [ssn, phone]
      assisted_query_columns: [ssn_idx]
"#;
    expect_code(bad, "BAD_CONFIG");
}

#[test]
fn duplicate_columns_rejected() {
    let bad = r#"
version: 1
tables:
  - name: user
    encryptor: { type: tagged, columns: [ssn, ssn] }
"#;
    expect_code(bad, "BAD_CONFIG");
}

#[test]
fn default_encryptor_is_validated() {
    let bad = r#"
version: 1
default_encryptor: { type: "", columns: [ssn] }
"#;
    let msg = expect_code(bad, "BAD_CONFIG");
    assert!(msg.contains("default_encryptor"));
}

#[test]
fn blank_table_name_rejected() {
    let bad = r#"
version: 1
tables:
  - name: " "
"#;
    expect_code(bad, "BAD_CONFIG");
}

#[test]
fn load_from_file_reads_rule() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("encrypt-rule.yaml");
    std::fs::write(&path, "version: 1\ntables:\n  - name: user\n").unwrap();
    let cfg = config::load_from_file(&path).unwrap();
    assert_eq!(cfg.tables.len(), 1);
}

#[test]
fn missing_file_is_internal() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::load_from_file(dir.path().join("nope.yaml")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
