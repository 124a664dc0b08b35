//! Reusable field validation rules

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::state::FieldErrors;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?[0-9][0-9 \-]{5,18}[0-9]$";

fn matches(cell: &'static OnceLock<Result<Regex, regex::Error>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

pub fn is_email(value: &str) -> bool {
    static EMAIL: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    matches(&EMAIL, EMAIL_PATTERN, value)
}

pub fn is_phone(value: &str) -> bool {
    static PHONE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    matches(&PHONE, PHONE_PATTERN, value)
}

/// Parse a decimal amount such as `1234.5` into minor units.
/// Thousands separators are accepted; more than two fraction digits or a
/// negative sign are rejected.
pub fn parse_money(value: &str) -> Option<i64> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() || frac.len() > 2 {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Small builder so model `validate` impls read as a list of rules
pub struct Rules {
    errors: FieldErrors,
}

impl Rules {
    pub fn new() -> Self {
        Self { errors: FieldErrors::new() }
    }

    fn fail(&mut self, key: &'static str, message: String) {
        // first failing rule wins
        self.errors.entry(key).or_insert(message);
    }

    pub fn required(mut self, key: &'static str, label: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(key, format!("{} is required", label));
        }
        self
    }

    pub fn email(mut self, key: &'static str, value: &str) -> Self {
        if !value.trim().is_empty() && !is_email(value.trim()) {
            self.fail(key, "Enter a valid email address".to_string());
        }
        self
    }

    /// Phone numbers are optional unless combined with `required`
    pub fn phone(mut self, key: &'static str, value: &str) -> Self {
        if !value.trim().is_empty() && !is_phone(value.trim()) {
            self.fail(key, "Enter a valid phone number".to_string());
        }
        self
    }

    pub fn money(mut self, key: &'static str, value: &str) -> Self {
        if parse_money(value).is_none() {
            self.fail(key, "Enter an amount like 1500.00".to_string());
        }
        self
    }

    pub fn date(mut self, key: &'static str, value: &str) -> Self {
        if parse_date(value).is_none() {
            self.fail(key, "Use the format YYYY-MM-DD".to_string());
        }
        self
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rule() {
        assert!(is_email("jane.doe@example.com"));
        assert!(!is_email("jane.doe@"));
        assert!(!is_email("no-at-sign.com"));
    }

    #[test]
    fn phone_rule() {
        assert!(is_phone("+94 77 123 4567"));
        assert!(is_phone("011-2345678"));
        assert!(!is_phone("12ab"));
        assert!(!is_phone("123"));
    }

    #[test]
    fn money_parsing() {
        assert_eq!(parse_money("1500"), Some(150000));
        assert_eq!(parse_money("1,500.5"), Some(150050));
        assert_eq!(parse_money("0.07"), Some(7));
        assert_eq!(parse_money("1.234"), None);
        assert_eq!(parse_money("-5"), None);
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money(".5"), None);
    }

    #[test]
    fn date_parsing() {
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("29/02/2024"), None);
    }

    #[test]
    fn first_failing_rule_is_reported() {
        let errors = Rules::new()
            .required("email", "Email", "")
            .email("email", "")
            .required("name", "Name", "Ann")
            .finish();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        assert!(!errors.contains_key("name"));
    }
}
