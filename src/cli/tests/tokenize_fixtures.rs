// Fixture-driven tests for `al tokenize`
use libtest_mimic::{run, Arguments, Failed, Trial};
use serde_json::Value;
use std::fs;
use std::path::Path;

mod common;
use common::{al_cmd, validate_json_output};

const INPUT_ROOT: &str = "tests/tokenize/input";
const EXPECTED_ROOT: &str = "tests/tokenize/expected";

fn main() {
    let args = Arguments::from_args();

    let mut trials: Vec<Trial> = vec![
        Trial::test("tokenize_resumes_in_string_state", test_resume_in_string),
        Trial::test("tokenize_lines_carries_state", test_lines_carry_state),
        Trial::test("tokenize_text_output_ends_with_state", test_text_output),
        Trial::test("tokenize_rejects_unknown_state", test_unknown_state),
    ];

    trials.extend(discover_tests_in_root(Path::new(INPUT_ROOT)));

    run(&args, trials).exit();
}

fn tokenize_json(args: &[&str]) -> Result<Value, Failed> {
    let output = al_cmd()
        .arg("tokenize")
        .args(args)
        .args(["-o", "json"])
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    serde_json::from_slice(&output.stdout)
        .map_err(|e| Failed::from(format!("Failed to parse output: {e}")))
}

fn test_resume_in_string() -> Result<(), Failed> {
    let json = tokenize_json(&[
        "--source",
        "tests/tokenize/input/unterminated_string.al",
        "--state",
        "string-body",
    ])?;

    // `$oops` read from inside a string closes it on the first character
    if json["tokens"][0]["category"] != "string" || json["tokens"][0]["lexeme"] != "$" {
        return Err(format!("Expected closing delimiter first: {json}").into());
    }
    if json["tokens"][1]["category"] != "identifier" || json["end_state"] != "root" {
        return Err(format!("Expected to be back in root: {json}").into());
    }
    Ok(())
}

fn test_lines_carry_state() -> Result<(), Failed> {
    let json = tokenize_json(&["--sample", "functions", "--lines"])?;
    let lines = json.as_array().ok_or("Expected an array of lines")?;

    if lines.len() != 6 {
        return Err(format!("Expected 6 lines, got {}", lines.len()).into());
    }
    for pair in lines.windows(2) {
        if pair[0]["end_state"] != pair[1]["start_state"] {
            return Err(format!("State not carried between lines: {pair:?}").into());
        }
    }
    if lines[0]["tokens"][0]["category"] != "comment-doc" {
        return Err(format!("Expected doc comment on line 1: {}", lines[0]).into());
    }
    Ok(())
}

fn test_text_output() -> Result<(), Failed> {
    let output = al_cmd()
        .args(["tokenize", "--source", "tests/tokenize/input/open_comment.al"])
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() || !stdout.ends_with("end state: comment\n") {
        return Err(format!("Unexpected text output: {stdout}").into());
    }
    if stdout.lines().count() != 3 {
        return Err(format!("Expected two tokens and the end state: {stdout}").into());
    }
    Ok(())
}

fn test_unknown_state() -> Result<(), Failed> {
    let output = al_cmd()
        .args(["tokenize", "--sample", "hello", "--state", "nested"])
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;

    if output.status.success() {
        return Err("Expected an unknown start state to be rejected".into());
    }
    Ok(())
}

fn discover_tests_in_root(root_dir: &Path) -> Vec<Trial> {
    let mut trials = Vec::new();
    collect_tests(root_dir, Path::new(""), &mut trials);
    trials
}

fn collect_tests(base_dir: &Path, relative_dir: &Path, trials: &mut Vec<Trial>) {
    let current_dir = base_dir.join(relative_dir);
    let Ok(entries) = fs::read_dir(&current_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let dir_name = path.file_name().unwrap();
            collect_tests(base_dir, &relative_dir.join(dir_name), trials);
        } else if path.extension().and_then(|e| e.to_str()) == Some("al") {
            let file_stem = path.file_stem().unwrap().to_string_lossy().to_string();
            let dir_str = relative_dir.to_string_lossy().to_string();

            let test_name = if dir_str.is_empty() {
                format!("tokenize_{file_stem}")
            } else {
                let safe_dir = dir_str.replace(std::path::MAIN_SEPARATOR, "_");
                format!("tokenize_{safe_dir}_{file_stem}")
            };

            trials.push(Trial::test(test_name, move || {
                run_fixture(&dir_str, &file_stem)
            }));
        }
    }
}

fn run_fixture(dir_name: &str, file_name: &str) -> Result<(), Failed> {
    let relative = Path::new(dir_name).join(file_name);
    let input_file = Path::new(INPUT_ROOT).join(&relative).with_extension("al");
    let expected_json = Path::new(EXPECTED_ROOT).join(&relative).with_extension("json");

    let output = al_cmd()
        .args(["tokenize", "--source"])
        .arg(&input_file)
        .args(["-o", "json"])
        .output()
        .map_err(|e| format!("Failed to execute command: {e}"))?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    validate_json_output(&stdout, &expected_json).map_err(Failed::from)
}
