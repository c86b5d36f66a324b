//! Telephone number checks
//!
//! Numbers are taken as typed: no punctuation or whitespace is stripped
//! before the length check.

use crate::field::Failure;

/// Number of characters a phone number must have.
pub const PHONE_LENGTH: usize = 10;

/// Checks a phone value against the expected length, then for digits only.
///
/// Returns the first failure found, or `None` when the value is acceptable.
pub fn check_phone(value: &str, expected_length: usize) -> Option<Failure> {
    if value.chars().count() != expected_length {
        return Some(Failure::Length);
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(Failure::Format);
    }

    None
}

/// Convenience check using [`PHONE_LENGTH`].
pub fn is_valid_phone(value: &str) -> bool {
    check_phone(value, PHONE_LENGTH).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(check_phone("12345", PHONE_LENGTH), Some(Failure::Length));
        assert_eq!(check_phone("12345678901", PHONE_LENGTH), Some(Failure::Length));
        assert_eq!(check_phone("(555) 123-4567", PHONE_LENGTH), Some(Failure::Length));
        assert_eq!(check_phone("1234567890", PHONE_LENGTH), None);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(check_phone("12345abcde", PHONE_LENGTH), Some(Failure::Format));
        assert_eq!(check_phone("555-123-45", PHONE_LENGTH), Some(Failure::Format));
        assert_eq!(check_phone(" 123456789", PHONE_LENGTH), Some(Failure::Format));
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(check_phone("1234567", 7), None);
        assert_eq!(check_phone("1234567890", 7), Some(Failure::Length));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("０１２３４５６７８９"));
    }
}
