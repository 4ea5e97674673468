//! Phone number rules
//!
//! Only hyphens and spaces are treated as separators. Anything else that is
//! not a digit makes the number invalid.

/// Required digit count after normalization.
pub const PHONE_DIGITS: usize = 10;

/// Strip hyphens and spaces.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// True when the number normalizes to exactly ten ASCII digits.
pub fn is_valid_phone(raw: &str) -> bool {
    let number = normalize_phone(raw);
    number.len() == PHONE_DIGITS && number.chars().all(|c| c.is_ascii_digit())
}
