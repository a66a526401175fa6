//! Check command integration tests.
//!
//! All tests evaluate captured reports via `--input`, so they run the same on
//! any host.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn supported_report_passes() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg(TestEnv::fixture_path("report_supported.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Passed: 1"))
    .stdout(predicate::str::contains("os-version"));
}

#[test]
fn old_version_fails_with_exit_code_1() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg(TestEnv::fixture_path("report_old_version.json"))
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Failed: 1"))
    .stdout(predicate::str::contains("not supported"));
}

#[test]
fn client_sku_fails_with_exit_code_1() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg(TestEnv::fixture_path("report_client_sku.json"))
    .assert()
    .code(1)
    .stdout(predicate::str::contains("SKU 48"));
}

#[test]
fn missing_edition_field_is_unavailable_with_exit_code_2() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg(TestEnv::fixture_path("report_missing_sku.json"))
    .assert()
    .code(2)
    .stdout(predicate::str::contains("Unavailable: 1"));
}

#[test]
fn json_output_is_parseable() {
  let env = TestEnv::new();

  let assert = env
    .synceval()
    .arg("check")
    .arg("--json")
    .arg("--input")
    .arg(TestEnv::fixture_path("report_supported.json"))
    .assert()
    .success();

  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(reports[0]["name"], "os-version");
  assert_eq!(reports[0]["outcome"], "success");
}

#[test]
fn custom_config_overrides_the_allow_lists() {
  let env = TestEnv::new();
  let config = env.write_file(
    "strict.json",
    r#"{ "validOsVersions": ["99.0"], "validOsSkus": [1] }"#,
  );

  // A report that passes the defaults fails the stricter config.
  env
    .synceval()
    .arg("check")
    .arg("--config")
    .arg(&config)
    .arg("--input")
    .arg(TestEnv::fixture_path("report_supported.json"))
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Failed: 1"));
}

#[test]
fn missing_input_file_is_an_error() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg("no-such-report.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read report"));
}

#[test]
fn malformed_input_file_is_an_error() {
  let env = TestEnv::new();
  let report = env.write_file("broken.json", "{ not json");

  env
    .synceval()
    .arg("check")
    .arg("--input")
    .arg(&report)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to parse report"));
}
