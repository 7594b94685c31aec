use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_layer_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["select", "--layer", "far"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layer 'far'"));
}

#[test]
fn malformed_point_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["select", "--point", "90,30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid point '90,30'"));
}
