use crate::utils::error::{CalcError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> CalcError {
    CalcError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The `--config` argument must name a `.toml` file.
pub fn validate_config_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(()),
        Some(ext) => Err(invalid(
            field_name,
            path,
            format!("Unsupported file extension: {}. Expected: toml", ext),
        )),
        None => Err(invalid(field_name, path, "File has no .toml extension")),
    }
}

/// Prompts are written inline before the answer is read, so they must show
/// something and stay on one line.
pub fn validate_prompt(field_name: &str, prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(invalid(field_name, prompt, "Prompt cannot be empty or whitespace-only"));
    }
    if prompt.contains(['\n', '\r']) {
        return Err(invalid(field_name, prompt, "Prompt must fit on a single line"));
    }
    Ok(())
}
