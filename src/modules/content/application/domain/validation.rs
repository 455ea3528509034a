use email_address::EmailAddress;
use url::Url;

/// Rejected input. Raised before any store call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} cannot be null")]
    NotNullable(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{0} must be an absolute http(s) URL")]
    InvalidUrl(&'static str),

    #[error("Proficiency must be between 0 and 100, got {0}")]
    ProficiencyOutOfRange(i64),

    #[error("Unknown skill category: {0}")]
    UnknownCategory(String),
}

// ------------------------
// Field helpers
// ------------------------

pub(crate) fn required_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text is treated as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn email(value: String) -> Result<String, ValidationError> {
    let value = required_text("email", value)?;
    if !EmailAddress::is_valid(&value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value)
}

pub(crate) fn absolute_url(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = required_text(field, value)?;
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(value),
        _ => Err(ValidationError::InvalidUrl(field)),
    }
}

pub(crate) fn optional_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    optional_text(value)
        .map(|v| absolute_url(field, v))
        .transpose()
}

pub(crate) fn technologies(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
