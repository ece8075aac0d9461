//! Single-field predicates for contact and Indian tax identifiers.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

// GSTIN layout: 2-digit state code, the holder's PAN (5 letters, 4 digits,
// 1 letter), 1 alnum registration count, the literal "Z", 1 alnum checksum.
static GSTIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$").unwrap());

// PAN layout: 5 letters, 4 digits, 1 letter.
static PAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

/// Whether `input` looks like a deliverable email address.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL.is_match(input.trim())
}

/// Whether `input` is a plausible phone number: an optional leading `+`
/// followed by 10-15 digits. Spaces, dashes and parentheses are stripped
/// before matching.
pub fn is_valid_phone(input: &str) -> bool {
    let normalized: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE.is_match(&normalized)
}

/// Whether `input` is a structurally valid GSTIN. Case-insensitive: the
/// input is upper-cased before matching.
pub fn is_valid_gstin(input: &str) -> bool {
    GSTIN.is_match(&input.trim().to_uppercase())
}

/// Whether `input` is a structurally valid PAN. Case-insensitive.
pub fn is_valid_pan(input: &str) -> bool {
    PAN.is_match(&input.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_emails() {
        assert!(is_valid_email("accounts@acme.co.in"));
        assert!(is_valid_email("first.last+tag@example.com"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("trailing-dot@example."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn accepts_plausible_phone_numbers() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(022) 4000-1234-56"));
    }

    #[test]
    fn rejects_short_or_lettered_phone_numbers() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765abcde"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn gstin_fixture_from_the_books() {
        assert!(is_valid_gstin("27AADCB1234Z1Z5"));
        assert!(is_valid_gstin("27aadcb1234z1z5")); // case-insensitive
        assert!(!is_valid_gstin("invalid"));
        assert!(!is_valid_gstin("27AADCB1234Z1X5")); // 14th char must be Z
        assert!(!is_valid_gstin("7AADCB1234Z1Z5")); // state code too short
    }

    #[test]
    fn pan_fixture_from_the_books() {
        assert!(is_valid_pan("AADCB1234Z"));
        assert!(is_valid_pan("aadcb1234z"));
        assert!(!is_valid_pan("AADCB123Z"));
        assert!(!is_valid_pan("1ADCB1234Z"));
    }
}
