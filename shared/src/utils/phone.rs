//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").expect("E.164 pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for logs, keeping only the last four digits
/// (e.g. `+1******2671`)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    let plus = if normalized.starts_with('+') { "+" } else { "" };
    let digits = normalized.trim_start_matches('+');
    let len = digits.len();
    if len <= 4 {
        return format!("{}{}", plus, "*".repeat(len));
    }

    // Keep the leading country digit of long international numbers
    let lead = if !plus.is_empty() && len > 6 { &digits[..1] } else { "" };
    let hidden = len - 4 - lead.len();
    format!("{}{}{}{}", plus, lead, "*".repeat(hidden), &digits[len - 4..])
}
