use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn settings_file_overrides_environment() {
    let ctx = TestContext::new();
    ctx.write_settings("[locale]\nlang = \"zh_CN\"\n");

    ctx.cli()
        .args(["single", "-a", "左"])
        .assert()
        .success()
        .stdout("<sks> left side view eye-level shot medium shot\n");
}

#[test]
fn lang_flag_overrides_settings_file() {
    let ctx = TestContext::new();
    ctx.write_settings("[locale]\nlang = \"zh_CN\"\n");

    ctx.cli()
        .args(["--lang", "en", "single", "-a", "Left"])
        .assert()
        .success()
        .stdout("<sks> left side view eye-level shot medium shot\n");
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    let path = ctx.write_file("custom.toml", "[locale]\nlang = \"zh\"\n");

    ctx.cli()
        .arg("--config")
        .arg(&path)
        .args(["single", "-d", "近景"])
        .assert()
        .success()
        .stdout("<sks> front view eye-level shot close-up\n");
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "missing.toml", "nodes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings file not found"));
}

#[test]
fn malformed_settings_file_fails() {
    let ctx = TestContext::new();
    ctx.write_settings("[locale\n");

    ctx.cli().arg("nodes").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}
