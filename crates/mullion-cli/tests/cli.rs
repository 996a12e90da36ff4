use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn run_cmd(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("mullion")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("mullion")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_phone_normalizes_display_and_href() {
    let value = run_cmd_json(&["phone", "212.555.0199 ext. 42", "--href"]);
    assert_eq!(value["display"], "(212) 555-0199 Ext 42");
    assert_eq!(value["href"], "tel:(212) 555-0199;42");

    let plain = run_cmd(&["phone", "2125550199"]);
    assert_eq!(plain.trim(), "(212) 555-0199");
}

#[test]
fn cli_phone_rejects_non_numbers() {
    let output = cargo_bin_cmd!("mullion")
        .args(["phone", "abc"])
        .output()
        .expect("run command");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_columns_takes_the_index_as_positional() {
    let output = run_cmd(&["columns", "one-third", "3"]);
    assert_eq!(output.trim(), "one-third first");

    let value = run_cmd_json(&["columns", "one-half", "2"]);
    assert_eq!(value["index"], 2);
    assert_eq!(value["columns"], 2);
    assert_eq!(value["classes"], "one-half first");
}

#[test]
fn cli_columns_previews_a_grid() {
    let value = run_cmd_json(&["columns", "one-third", "--grid", "4"]);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["classes"], "one-third first");
    assert_eq!(items[1]["classes"], "one-third");
    assert_eq!(items[2]["classes"], "one-third");
    assert_eq!(items[3]["classes"], "one-third first");
}

#[test]
fn cli_defaults_reports_widget_settings() {
    let value = run_cmd_json(&["defaults", "featured"]);
    assert_eq!(value["show_content"], "excerpt");
    assert_eq!(value["more_text"], "[Read More...]");
    assert_eq!(value["posts_num"], Value::Null);
}

#[test]
fn cli_config_reads_custom_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.toml");
    fs::write(&path, "icon_font = \"ionicons\"\na11y_headings = true\n").expect("write config");

    let value = run_cmd_json(&["--config", path.to_str().expect("config path"), "config"]);
    assert_eq!(value["icon_font"], "ionicons");
    assert_eq!(value["a11y_headings"], true);
    assert_eq!(value["entry_heading"], "h4");
}
