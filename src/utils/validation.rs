use crate::utils::error::{DepsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DepsError::InvalidInput {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DepsError::InvalidInput {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DepsError::InvalidInput {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A specifier is embedded in the shell command handed to `apt-venv -c`, so
/// only characters that occur in package names, versions and release pins
/// are accepted.
pub fn validate_specifier(field_name: &str, specifier: &str) -> Result<()> {
    validate_non_empty_string(field_name, specifier)?;

    if let Some(bad) = specifier
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || ".+-:~=_/".contains(*c)))
    {
        return Err(DepsError::InvalidInput {
            field: field_name.to_string(),
            value: specifier.to_string(),
            reason: format!("Unsupported character {:?} in package specifier", bad),
        });
    }

    if specifier.starts_with('-') {
        return Err(DepsError::InvalidInput {
            field: field_name.to_string(),
            value: specifier.to_string(),
            reason: "Package specifier cannot start with '-'".to_string(),
        });
    }

    Ok(())
}
