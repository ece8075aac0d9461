//! Password strength classification.

use serde::Serialize;

const MIN_LEN: usize = 8;

/// Three-level strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// 5-point heuristic score: length >= 8, lowercase, uppercase, digit,
    /// special character.
    pub score: u8,
    pub level: StrengthLevel,
    /// Acceptable for account use: length satisfied **and** score >= 3.
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Score `password` on the 5-point heuristic.
///
/// Strong requires score >= 4, medium >= 3, otherwise weak. A length failure
/// always contributes an error, regardless of how the character classes
/// score.
pub fn password_strength(password: &str) -> PasswordStrength {
    let long_enough = password.chars().count() >= MIN_LEN;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let score = [long_enough, has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&hit| hit)
        .count() as u8;

    let level = if score >= 4 {
        StrengthLevel::Strong
    } else if score >= 3 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    };

    let mut errors = Vec::new();
    if !long_enough {
        errors.push(format!("Password must be at least {MIN_LEN} characters"));
    }
    if score < 3 {
        errors.push(
            "Password needs more variety: mix lowercase, uppercase, digits and symbols"
                .to_string(),
        );
    }

    PasswordStrength {
        score,
        level,
        is_valid: long_enough && score >= 3,
        errors,
    }
}
