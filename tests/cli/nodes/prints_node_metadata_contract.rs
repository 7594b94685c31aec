use crate::harness::TestContext;
use serde_json::{Value, json};

fn nodes(ctx: &TestContext, lang: &str) -> Value {
    let output = ctx.cli().args(["nodes", "--lang", lang]).output().expect("failed to run nodes");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("nodes output is JSON")
}

#[test]
fn english_registry() {
    let ctx = TestContext::new();
    let value = nodes(&ctx, "en");

    assert_eq!(value[0]["class_name"], "AnglesSelector3D");
    assert_eq!(value[0]["display_name"], "3D Angles Selector");
    assert_eq!(
        value[0]["INPUT_TYPES"]["required"]["selected_points"],
        json!(["STRING", { "default": "[]", "multiline": false }])
    );
    assert_eq!(value[0]["OUTPUT_IS_LIST"], json!([true]));

    assert_eq!(value[1]["class_name"], "SimpleAnglesSelector");
    assert_eq!(value[1]["display_name"], "Simple Angles Selector");
    assert_eq!(value[1]["OUTPUT_IS_LIST"], json!([false]));
    assert_eq!(value[1]["INPUT_TYPES"]["required"]["Azimuth"][1]["default"], "Front");
}

#[test]
fn chinese_registry_localizes_names_and_inputs() {
    let ctx = TestContext::new();
    let value = nodes(&ctx, "zh_CN");

    assert_eq!(value[0]["display_name"], "3D角度选择器");
    assert_eq!(value[1]["display_name"], "简易角度选择器");
    let required = value[1]["INPUT_TYPES"]["required"].as_object().unwrap();
    let names: Vec<_> = required.keys().map(String::as_str).collect();
    assert_eq!(names, ["方位角", "仰角", "距离"]);
    assert_eq!(required["距离"][0], json!(["近景", "中景", "远景"]));
    assert_eq!(required["距离"][1]["default"], "中景");
}
