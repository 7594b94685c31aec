use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_one_prompt_per_point_in_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "multi",
            r#"[{"azimuth":90},{"azimuth":315,"elevation":60,"distance":0}]"#,
        ])
        .assert()
        .success()
        .stdout(
            "<sks> right side view eye-level shot medium shot\n\
             <sks> front-left quarter view high-angle shot close-up\n",
        );
}

#[test]
fn default_input_prints_nothing() {
    let ctx = TestContext::new();

    ctx.cli().arg("multi").assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn invalid_json_is_not_an_error() {
    let ctx = TestContext::new();

    ctx.cli().args(["m", "not json"]).assert().success().stdout(predicate::str::is_empty());
    ctx.cli()
        .args(["m", r#"{"azimuth":90}"#])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
