#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub fn al_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_al"))
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn expect_success(output: &Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(stdout_of(output))
}

/// Whether every key and array element in `expected` is present in `actual`.
/// `"{{*}}"` matches any value.
pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map.iter().all(|(k, v)| {
            act_map
                .get(k)
                .is_some_and(|act_v| json_subset(v, act_v))
        }),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr
                    .iter()
                    .zip(act_arr.iter())
                    .all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        _ => expected == actual,
    }
}

pub fn validate_json_output(stdout: &str, expected_path: &Path) -> Result<(), String> {
    let expected_content = fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file: {e}"))?;
    let expected_json: Value = serde_json::from_str(&expected_content)
        .map_err(|e| format!("Failed to parse expected JSON: {e}"))?;
    let actual_json: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse actual JSON output: {e}"))?;

    if !json_subset(&expected_json, &actual_json) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(&expected_json).unwrap(),
            serde_json::to_string_pretty(&actual_json).unwrap()
        ));
    }

    Ok(())
}
