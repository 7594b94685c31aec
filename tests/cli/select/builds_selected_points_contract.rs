use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn layer_selection_feeds_multi() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["select", "--layer", "wide"]).output().expect("select failed");
    assert!(output.status.success());
    let document = String::from_utf8(output.stdout).unwrap();
    let points: Vec<Value> = serde_json::from_str(document.trim()).unwrap();
    assert_eq!(points.len(), 32);
    assert!(points.iter().all(|p| p["distance"] == 2));

    ctx.cli()
        .args(["multi", "--json", document.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<sks> front view low-angle shot wide shot"));
}

#[test]
fn points_toggle_and_summary_goes_to_stderr() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["sel", "-p", "90,-30,0", "-p", "0,0,1"])
        .assert()
        .success()
        .stdout(
            "[{\"azimuth\":90,\"elevation\":-30,\"distance\":0},{\"azimuth\":0,\"elevation\":0,\"distance\":1}]\n",
        )
        .stderr(predicate::str::contains("Selected: 2 angles"));
}

#[test]
fn empty_selection_message_is_localized() {
    let ctx = TestContext::new();

    ctx.cli_with_locale("zh_TW")
        .arg("select")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("未选择任何角度"));
}
