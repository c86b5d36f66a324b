//! Email format check

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::trim;

/// Pattern every submitted address must match. ASCII only, TLD of 2 to 4 letters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validates an email address after trimming surrounding whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(trim(email))
}
