use crate::utils::error::{NeisError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(NeisError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(NeisError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(NeisError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NeisError::MissingParameter {
            name: field_name.to_string(),
        });
    }
    Ok(())
}

/// Accepts exactly eight ASCII digits forming a real calendar date.
pub fn validate_date_yyyymmdd(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NeisError::validation(
            field_name,
            format!("expected 8-digit YYYYMMDD date, got '{}'", value),
        ));
    }

    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| {
        NeisError::validation(field_name, format!("'{}' is not a valid calendar date", value))
    })?;

    Ok(())
}

pub fn validate_all_digits(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NeisError::validation(
            field_name,
            format!("expected a numeric value, got '{}'", value),
        ));
    }
    Ok(())
}

/// Console-side rule: grades run 1 through 6 at most (elementary).
pub fn validate_grade(field_name: &str, value: &str) -> Result<()> {
    match value.parse::<u8>() {
        Ok(grade) if (1..=6).contains(&grade) => Ok(()),
        _ => Err(NeisError::validation(
            field_name,
            format!("expected a grade between 1 and 6, got '{}'", value),
        )),
    }
}
