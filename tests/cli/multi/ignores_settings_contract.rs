use crate::harness::TestContext;
use predicates::prelude::*;

const BROKEN_SETTINGS: &str = "[locale]\nlanguage = \"zh\"\n";

#[test]
fn multi_succeeds_with_broken_settings_file() {
    let ctx = TestContext::new();
    ctx.write_settings(BROKEN_SETTINGS);

    ctx.cli()
        .args(["multi", r#"[{"azimuth":90}]"#])
        .assert()
        .success()
        .stdout("<sks> right side view eye-level shot medium shot\n");
}

#[test]
fn multi_ignores_missing_explicit_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "missing.toml", "multi", r#"[{"distance":0}]"#])
        .assert()
        .success()
        .stdout("<sks> front view eye-level shot close-up\n");
}

#[test]
fn locale_commands_still_reject_broken_settings_file() {
    let ctx = TestContext::new();
    ctx.write_settings(BROKEN_SETTINGS);

    ctx.cli().arg("nodes").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}
