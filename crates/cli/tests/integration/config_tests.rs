//! Config command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn prints_the_built_in_defaults() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("config")
    .assert()
    .success()
    .stdout(predicate::str::contains("validOsVersions"))
    .stdout(predicate::str::contains("10.0"));
}

#[test]
fn reflects_a_custom_configuration_file() {
  let env = TestEnv::new();
  let config = env.write_file("custom.json", r#"{ "validOsVersions": ["9.9"] }"#);

  env
    .synceval()
    .arg("config")
    .arg("--config")
    .arg(&config)
    .assert()
    .success()
    .stdout(predicate::str::contains("9.9"));
}

#[test]
fn missing_configuration_file_is_an_error() {
  let env = TestEnv::new();

  env
    .synceval()
    .arg("config")
    .arg("--config")
    .arg("no-such-config.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load configuration"));
}
