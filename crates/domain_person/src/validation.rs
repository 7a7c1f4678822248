//! Field rules shared by the person variants
//!
//! Each helper checks one rule and reports the first violation as a
//! [`PersonError::Validation`] naming the field.
//!
//! # Rules
//!
//! ## Natural persons
//! - First name and paternal surname required, at most 50 characters
//! - Maternal surname optional, at most 50 characters
//! - Birth date between 1900-01-01 and today
//!
//! ## Juridical persons
//! - Business name, trade name and representative name required, at most 100 characters
//! - Representative document required, at most 20 characters
//! - Constitution date between 1900-01-01 and today
//!
//! ## Base person
//! - Address required, at most 200 characters
//! - Country required, at most 60 characters

use chrono::NaiveDate;
use core_kernel::temporal::within;

use crate::error::PersonError;

pub const NAME_MAX: usize = 50;
pub const ENTITY_NAME_MAX: usize = 100;
pub const REPRESENTATIVE_DOCUMENT_MAX: usize = 20;
pub const ADDRESS_MAX: usize = 200;
pub const COUNTRY_MAX: usize = 60;

/// Earliest accepted birth or constitution date
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Unwraps an optional field, failing when it was not provided
pub fn present<T>(field: &'static str, value: Option<T>) -> Result<T, PersonError> {
    value.ok_or_else(|| PersonError::required(field))
}

/// Non-blank text no longer than `max` characters
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<(), PersonError> {
    if value.trim().is_empty() {
        return Err(PersonError::required(field));
    }
    max_len(field, value, max)
}

/// Text no longer than `max` characters; empty is accepted
pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), PersonError> {
    let len = value.chars().count();
    if len > max {
        return Err(PersonError::invalid(
            field,
            format!("must be at most {} characters, got {}", max, len),
        ));
    }
    Ok(())
}

/// Date within `[1900-01-01, today]`
pub fn historical_date(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), PersonError> {
    if !within(date, earliest_date(), today) {
        return Err(PersonError::invalid(
            field,
            format!("{} must be between {} and {}", date, earliest_date(), today),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("first_name", "   ", NAME_MAX).unwrap_err();
        assert_eq!(err.field(), Some("first_name"));
    }

    #[test]
    fn test_max_len_counts_characters_not_bytes() {
        let name = "Ñ".repeat(NAME_MAX);
        assert!(max_len("first_name", &name, NAME_MAX).is_ok());
        assert!(max_len("first_name", &format!("{}a", name), NAME_MAX).is_err());
    }

    #[test]
    fn test_historical_date_bounds() {
        let today = date(2024, 6, 1);
        assert!(historical_date("birth_date", date(1900, 1, 1), today).is_ok());
        assert!(historical_date("birth_date", today, today).is_ok());
        assert!(historical_date("birth_date", date(1899, 12, 31), today).is_err());
        assert!(historical_date("birth_date", date(2024, 6, 2), today).is_err());
    }

    #[test]
    fn test_present_reports_missing_field() {
        let err = present::<String>("trade_name", None).unwrap_err();
        assert!(err.to_string().contains("trade_name"));
    }
}
