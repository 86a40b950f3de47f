use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("phone pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

pub const MIN_PASSOUT_YEAR: i64 = 1990;
pub const MAX_PASSOUT_YEAR: i64 = 2025;
pub const MIN_DONATION: f64 = 10.0;
pub const MAX_DONATION: f64 = 10_000.0;
pub const MAX_FEEDBACK_WORDS: usize = 200;

/// Checks the `(XXX) XXX-XXXX` phone format.
pub fn phone(value: &str) -> Result<(), String> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err("Phone must be in format (XXX) XXX-XXXX".to_string())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

pub fn passout_year(value: i64) -> Result<(), String> {
    if (MIN_PASSOUT_YEAR..=MAX_PASSOUT_YEAR).contains(&value) {
        Ok(())
    } else {
        Err(format!("Passout year must be between {MIN_PASSOUT_YEAR} and {MAX_PASSOUT_YEAR}"))
    }
}

pub fn donation_amount(value: f64) -> Result<(), String> {
    if (MIN_DONATION..=MAX_DONATION).contains(&value) {
        Ok(())
    } else {
        Err("Amount must be between $10 and $10,000".to_string())
    }
}

pub fn feedback_message(value: &str) -> Result<(), String> {
    if value.split_whitespace().count() > MAX_FEEDBACK_WORDS {
        Err(format!("Feedback must not exceed {MAX_FEEDBACK_WORDS} words"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_format() {
        assert!(phone("(555) 123-4567").is_ok());
        assert!(phone("555-123-4567").is_err());
        assert!(phone("(555)123-4567").is_err());
        assert!(phone("(555) 123-456").is_err());
    }

    #[test]
    fn email_format() {
        assert!(email("alice@example.com").is_ok());
        assert!(email("alice@example").is_err());
        assert!(email("not-an-email").is_err());
        assert!(email("a b@example.com").is_err());
    }

    #[test]
    fn passout_year_bounds() {
        assert!(passout_year(1990).is_ok());
        assert!(passout_year(2025).is_ok());
        assert!(passout_year(1989).is_err());
        assert!(passout_year(2026).is_err());
    }

    #[test]
    fn donation_bounds() {
        assert!(donation_amount(10.0).is_ok());
        assert!(donation_amount(10_000.0).is_ok());
        assert!(donation_amount(9.99).is_err());
        assert!(donation_amount(10_000.01).is_err());
    }

    #[test]
    fn feedback_word_limit() {
        let short = "thanks for everything";
        assert!(feedback_message(short).is_ok());
        let long = (0..201).map(|_| "word").collect::<Vec<_>>().join(" ");
        assert!(feedback_message(&long).is_err());
    }
}
