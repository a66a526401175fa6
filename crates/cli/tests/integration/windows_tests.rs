//! Windows-only integration tests that exercise the live PowerShell runner.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn live_check_reaches_the_os_validation() {
  let env = TestEnv::new();

  // The outcome depends on the host (a client SKU fails the edition check),
  // so only the report shape is asserted.
  env
    .synceval()
    .arg("check")
    .assert()
    .stdout(predicate::str::contains("os-version"))
    .stdout(predicate::str::contains("Checked 1 validation(s)"));
}
