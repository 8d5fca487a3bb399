use al_lib::LexerState;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_-]*$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).is_file() {
        Ok(path.to_string())
    } else {
        Err(format!("File does not exist: {path}"))
    }
}

pub fn validate_name(name: &str) -> Result<String, String> {
    if name.len() > 50 {
        return Err("Name must be 50 characters or less".to_string());
    }
    if !NAME_REGEX.is_match(name) {
        return Err("Name must match pattern: ^[a-zA-Z_][a-zA-Z0-9_-]*$".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_state(state: &str) -> Result<LexerState, String> {
    state.parse()
}
