use crate::utils::error::{ValidationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Absent and empty input share the same rejection.
pub fn validate_required_field<'a>(field_name: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::missing(field_name)),
    }
}

pub fn validate_range(
    field_name: &str,
    component: &str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<()> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field_name.to_string(),
            component: component.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ValidationError::config(format!(
            "{} '{}' is not supported. Allowed values: {}",
            field_name,
            value,
            allowed.join(", ")
        )));
    }
    Ok(())
}
