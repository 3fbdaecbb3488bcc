use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Earliest calendar year accepted for any submitted date.
pub const MIN_YEAR: i32 = 1900;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Parse a required `YYYY-MM-DD` date and reject years before 1900.
pub fn parse_date(value: &str, field_name: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field_name} is required"));
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| format!("Invalid date format or value: {e}"))?;
    if date.year() < MIN_YEAR {
        return Err(format!("{field_name} must be after {MIN_YEAR}."));
    }
    Ok(date)
}

/// Like [`parse_date`], but an empty value yields `None`.
pub fn parse_optional_date(value: &str, field_name: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value, field_name).map(Some)
}

/// Parse a required numeric id from a select box.
pub fn parse_id(value: &str, field_name: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field_name} is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| format!("{field_name} is not a valid selection"))
}

/// Parse an optional id; empty means none.
pub fn parse_optional_id(value: &str, field_name: &str) -> Result<Option<i64>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_id(value, field_name).map(Some)
}

/// Parse an optional non-negative amount such as a budget or salary.
pub fn parse_amount(value: &str, field_name: &str) -> Result<Option<Decimal>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| format!("{field_name} must be a number"))?;
    if amount.is_sign_negative() {
        return Err(format!("{field_name} must not be negative"));
    }
    Ok(Some(amount.round_dp(2)))
}

/// Parse a rating and check it is within 1..=5.
pub fn parse_rating(value: &str) -> Result<i16, String> {
    let rating: i16 = value
        .trim()
        .parse()
        .map_err(|_| "Rating must be a whole number".to_string())?;
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5".to_string());
    }
    Ok(rating)
}

/// Check that a date range does not end before it starts.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Option<String> {
    if end < start {
        return Some("End date must not be before start date".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_year_before_1900_is_rejected() {
        let err = parse_date("1899-12-31", "Date of birth").unwrap_err();
        assert_eq!(err, "Date of birth must be after 1900.");
    }

    #[test]
    fn date_year_1900_and_later_is_accepted() {
        assert_eq!(
            parse_date("1901-01-15", "Date of birth").unwrap(),
            NaiveDate::from_ymd_opt(1901, 1, 15).unwrap()
        );
        assert!(parse_date("1900-01-01", "Hire date").is_ok());
    }

    #[test]
    fn malformed_date_reports_format_error() {
        let err = parse_date("15/01/1990", "Hire date").unwrap_err();
        assert!(err.starts_with("Invalid date format or value"));
    }

    #[test]
    fn empty_required_date_is_reported() {
        assert_eq!(parse_date("  ", "Hire date").unwrap_err(), "Hire date is required");
        assert_eq!(parse_optional_date("", "Contract end").unwrap(), None);
    }

    #[test]
    fn ids_and_ratings() {
        assert_eq!(parse_id(" 42 ", "Position").unwrap(), 42);
        assert!(parse_id("abc", "Position").is_err());
        assert_eq!(parse_optional_id("", "Reviewer").unwrap(), None);
        assert_eq!(parse_rating("5").unwrap(), 5);
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("6").is_err());
    }

    #[test]
    fn amounts_are_rounded_and_non_negative() {
        assert_eq!(parse_amount("", "Budget").unwrap(), None);
        assert_eq!(
            parse_amount("1200.456", "Budget").unwrap(),
            Some(Decimal::new(120046, 2))
        );
        assert!(parse_amount("-1", "Budget").is_err());
        assert!(parse_amount("lots", "Budget").is_err());
    }

    #[test]
    fn text_field_rules() {
        assert!(validate_required("", "First name", 50).is_some());
        assert!(validate_required(&"x".repeat(51), "First name", 50).is_some());
        assert!(validate_required("Ada", "First name", 50).is_none());
        assert!(validate_optional("", "Phone", 20).is_none());
        assert!(validate_email("ada@example.com").is_none());
        assert!(validate_email("ada").is_some());
    }

    #[test]
    fn date_range_must_not_be_reversed() {
        let a = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert!(validate_date_range(a, b).is_none());
        assert!(validate_date_range(a, a).is_none());
        assert!(validate_date_range(b, a).is_some());
    }
}
