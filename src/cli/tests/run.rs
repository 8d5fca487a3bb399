mod common;
use common::{al_cmd, expect_success, stdout_of};
use serde_json::Value;

#[cfg(unix)]
#[test]
fn test_run_streams_module_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = al_cmd()
        .args(["run", "--sample", "hello", "--module", "cat", "--module-arg=-"])
        .env_remove("AL_MODULE")
        .output()?;
    let stdout = expect_success(&output)?;

    if stdout != ",{$Hello, AntiLang!\\n$}print" {
        return Err(format!("Expected the echoed source, got: {stdout:?}").into());
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_run_json_reports_session() -> Result<(), Box<dyn std::error::Error>> {
    let output = al_cmd()
        .args(["run", "--sample", "countdown", "--module", "cat", "--module-arg=-", "-o", "json"])
        .env_remove("AL_MODULE")
        .output()?;
    let stdout = expect_success(&output)?;

    let json: Value = serde_json::from_str(&stdout)?;
    if json["session"] != 1 || json["status"] != "completed" {
        return Err(format!("Unexpected session summary: {json}").into());
    }
    let records = json["records"].as_array().ok_or("Expected records array")?;
    if records.len() != 9 || records[0]["text"] != ",10 = n let\n" || records[0]["sequence"] != 0 {
        return Err(format!("Unexpected records: {json}").into());
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_run_module_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let output = al_cmd()
        .args(["run", "--sample", "hello", "--module-arg=-"])
        .env("AL_MODULE", "cat")
        .output()?;
    let stdout = expect_success(&output)?;

    if !stdout.contains("Hello, AntiLang!") {
        return Err(format!("Expected the echoed source, got: {stdout:?}").into());
    }
    Ok(())
}

#[test]
fn test_run_missing_module() -> Result<(), Box<dyn std::error::Error>> {
    let output = al_cmd()
        .args(["run", "--sample", "hello", "--module", "definitely-not-an-antilang-binary"])
        .env_remove("AL_MODULE")
        .output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.code() != Some(6) {
        return Err(format!("Expected exit code 6, got {:?}", output.status.code()).into());
    }
    if !stderr.contains("Execution module unavailable") {
        return Err(format!("Unexpected stderr: {stderr}").into());
    }
    if !stdout_of(&output).is_empty() {
        return Err("Nothing should be displayed when the module fails to start".into());
    }
    Ok(())
}

#[test]
fn test_run_missing_source_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = al_cmd()
        .args(["run", "--source", "no/such/file.al"])
        .output()?;
    if output.status.success() {
        return Err("Expected a missing source file to be rejected".into());
    }
    Ok(())
}
