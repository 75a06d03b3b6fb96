//! Utility functions for the wallet core
//!
//! This module contains common utility functions used throughout the wallet core.

use crate::shared::constants::{DEFAULT_DATE_PATTERN, MONTH_DAY_PATTERN};
use crate::shared::error::WalletError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Generate a unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Parse an amount string without going through floating point.
pub fn parse_amount(amount: &str) -> Result<Decimal, WalletError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(WalletError::validation("Amount cannot be empty"));
    }
    Decimal::from_str(trimmed)
        .map_err(|_| WalletError::validation(format!("Invalid amount format: {}", amount)))
}

/// Validate a transfer amount and return its normalized string form
pub fn validate_amount(amount: &str) -> Result<String, WalletError> {
    let value = parse_amount(amount)?;
    if value <= Decimal::ZERO {
        return Err(WalletError::validation("Amount must be greater than zero"));
    }
    Ok(value.normalize().to_string())
}

/// Format a date the way the backend expects (`dd MMMM yyyy`, locale `en`)
pub fn format_backend_date(date: NaiveDate) -> String {
    date.format(DEFAULT_DATE_PATTERN).to_string()
}

/// Format a month/day pair the way the backend expects (`dd MMMM`)
pub fn format_month_day(date: NaiveDate) -> String {
    date.format(MONTH_DAY_PATTERN).to_string()
}

/// Parse a date in the backend's `dd MMMM yyyy` format
pub fn parse_backend_date(value: &str) -> Result<NaiveDate, WalletError> {
    NaiveDate::parse_from_str(value.trim(), DEFAULT_DATE_PATTERN)
        .map_err(|e| WalletError::validation(format!("Invalid date '{}': {}", value, e)))
}

/// Fineract returns dates as `[year, month, day]` arrays
pub fn date_from_parts(parts: &[i32]) -> Option<NaiveDate> {
    match parts {
        [year, month, day, ..] => {
            NaiveDate::from_ymd_opt(*year, u32::try_from(*month).ok()?, u32::try_from(*day).ok()?)
        }
        _ => None,
    }
}

/// Today's date in the backend format
pub fn today_backend_date() -> String {
    format_backend_date(chrono::Local::now().date_naive())
}

/// Reject blank required fields
pub fn require_non_empty(field: &str, value: &str) -> Result<(), WalletError> {
    if value.trim().is_empty() {
        return Err(WalletError::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Reject non-positive identifiers
pub fn require_id(field: &str, id: i64) -> Result<(), WalletError> {
    if id <= 0 {
        return Err(WalletError::validation(format!("{} must be a positive id", field)));
    }
    Ok(())
}

/// Mask all but the last four characters, for logging card numbers and keys
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id() {
        let id1 = generate_id();
        let id2 = generate_id();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36);
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("100.50").expect("valid amount"), "100.5");
        assert_eq!(validate_amount(" 0.1 ").expect("valid amount"), "0.1");
        assert!(validate_amount("").is_err());
        assert!(validate_amount("0").is_err());
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("1e400").is_err());
        assert!(validate_amount("abc").is_err());
    }

    #[test]
    fn test_amount_keeps_precision() {
        let value =
            parse_amount("0.1").expect("valid amount") + parse_amount("0.2").expect("valid amount");
        assert_eq!(value.to_string(), "0.3");
    }

    #[test]
    fn test_backend_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(format_backend_date(date), "05 March 2024");
        assert_eq!(format_month_day(date), "05 March");
        assert_eq!(parse_backend_date("05 March 2024").expect("parsable"), date);
        assert!(parse_backend_date("2024-03-05").is_err());
    }

    #[test]
    fn test_date_from_parts() {
        assert_eq!(date_from_parts(&[2024, 3, 5]), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(date_from_parts(&[2024, 13, 5]), None);
        assert_eq!(date_from_parts(&[2024, 3]), None);
        assert_eq!(date_from_parts(&[2024, -1, 5]), None);
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_non_empty("username", "mifos").is_ok());
        assert!(require_non_empty("username", "   ").is_err());
        assert!(require_id("clientId", 1).is_ok());
        assert!(require_id("clientId", 0).is_err());
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("4111111111111111"), "************1111");
        assert_eq!(mask("123"), "***");
    }
}
