#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use colcrypt_rule::config;
use colcrypt_rule::report::RuleReport;
use colcrypt_rule::EncryptRuntime;


#[test]
fn report_resolves_table_sources() {
    let rule = config::load_from_str(
        r#"
version: 1
default_encryptor:
  type: aes
  columns: [ssn]
tables:
  - name: user
    encryptor:
      type: aes_assisted
      columns: [ssn, phone]
      assisted_query_columns: [ssn_idx, phone_idx]
  - name: account
"#,
    )
    .unwrap();

    let report = RuleReport::from_rule(&rule);
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["tables"][0]["source"], "explicit");
    assert_eq!(v["tables"][0]["encryptor"]["type"], "aes_assisted");
    assert_eq!(
        v["tables"][0]["encryptor"]["columns"][1]["assisted_query_column"],
        "phone_idx"
    );
    assert_eq!(v["tables"][1]["source"], "default");
    assert_eq!(v["tables"][1]["encryptor"]["assisted_query_column_count"], 0);
    assert!(v["tables"][1]["encryptor"]["columns"][0]["assisted_query_column"].is_null());
}

#[test]
fn report_marks_unencrypted_tables() {
    let rule = config::load_from_str("version: 1\ntables:\n  - name: log\n").unwrap();
    let report = RuleReport::from_rule(&rule);
    assert_eq!(report.tables[0].source, "none");
    assert!(report.tables[0].encryptor.is_none());
    assert!(report.default_encryptor.is_none());
}

#[test]
fn engine_report_carries_encryptor_kind() {
    let rule = config::load_from_str(
        r#"
version: 1
default_encryptor:
  type: tagged
  columns: [card]
  props: { tag: "d" }
tables:
  - name: user
    encryptor:
      type: tagged_assisted
      columns: [ssn, phone]
      assisted_query_columns: [ssn_idx, phone_idx]
      props: { tag: "u" }
  - name: order
  - name: log
"#,
    )
    .unwrap();
    let rt = EncryptRuntime::new(&rule, fakes::registry()).unwrap();
    let v = serde_json::to_value(rt.report().unwrap()).unwrap();

    assert_eq!(v["tables"][0]["name"], "user");
    assert_eq!(v["tables"][0]["kind"], "query_assisted");
    assert_eq!(v["tables"][0]["type"], "tagged_assisted");
    assert_eq!(v["tables"][0]["supports_assisted_query"], true);
    assert_eq!(v["tables"][0]["columns"][1]["assisted_query_column"], "phone_idx");

    assert_eq!(v["tables"][1]["name"], "order");
    assert_eq!(v["tables"][1]["kind"], "plain");
    assert_eq!(v["tables"][1]["assisted_query_column_count"], 0);
    assert_eq!(v["tables"][2]["name"], "log");
}
