use once_cell::sync::Lazy;
use regex::Regex;

static ONLY_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{1,13}$").expect("valid regex"));

/// A restaurant name must be non-blank and contain at least one non-digit.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && !ONLY_DIGITS.is_match(trimmed)
}

/// Optional leading `+` followed by 1 to 13 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}
