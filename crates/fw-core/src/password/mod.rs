//! Password strength heuristic.
//!
//! A small stateless scoring function used by the sign-up and
//! change-password forms. It is advisory only; the backend enforces the
//! actual password policy.

use serde::{Deserialize, Serialize};

pub const MIN_LENGTH: usize = 8;
pub const STRONG_LENGTH: usize = 12;
pub const MAX_SCORE: u8 = 4;

const COMMON_PASSWORDS: [&str; 12] = [
    "password",
    "password1",
    "password123",
    "123456",
    "12345678",
    "123456789",
    "qwerty",
    "qwerty123",
    "letmein",
    "welcome",
    "iloveyou",
    "admin123",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// 0..=4
    pub score: u8,
    pub label: StrengthLabel,
    pub feedback: Vec<String>,
}

pub fn evaluate_password(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            score: 0,
            label: StrengthLabel::VeryWeak,
            feedback: vec!["Enter a password".to_string()],
        };
    }

    if COMMON_PASSWORDS
        .iter()
        .any(|common| common.eq_ignore_ascii_case(password))
    {
        return PasswordStrength {
            score: 0,
            label: StrengthLabel::VeryWeak,
            feedback: vec!["This password is too common".to_string()],
        };
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let mut points: i32 = 0;
    let mut feedback = Vec::new();

    if length >= MIN_LENGTH {
        points += 1;
    } else {
        feedback.push(format!("Use at least {MIN_LENGTH} characters"));
    }
    if length >= STRONG_LENGTH {
        points += 1;
    }
    if has_lower && has_upper {
        points += 1;
    } else {
        feedback.push("Mix upper and lower case letters".to_string());
    }
    if has_digit {
        points += 1;
    } else {
        feedback.push("Add a number".to_string());
    }
    if has_symbol {
        points += 1;
    } else {
        feedback.push("Add a symbol".to_string());
    }

    if has_repeated_run(password, 3) {
        points -= 1;
        feedback.push("Avoid repeating the same character".to_string());
    }

    let classes = [has_lower || has_upper, has_digit, has_symbol]
        .into_iter()
        .filter(|present| *present)
        .count();
    if classes <= 1 {
        points -= 1;
    }

    let score = points.clamp(0, MAX_SCORE as i32) as u8;
    PasswordStrength {
        score,
        label: StrengthLabel::from_score(score),
        feedback,
    }
}

fn has_repeated_run(password: &str, run: usize) -> bool {
    let mut last = None;
    let mut count = 0;
    for c in password.chars() {
        if Some(c) == last {
            count += 1;
        } else {
            last = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_very_weak() {
        let strength = evaluate_password("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.label, StrengthLabel::VeryWeak);
    }

    #[test]
    fn common_passwords_score_zero_regardless_of_case() {
        assert_eq!(evaluate_password("Password123").score, 0);
        assert_eq!(evaluate_password("QWERTY").score, 0);
    }

    #[test]
    fn digits_only_is_penalized() {
        // length >= 8 (+1), digit (+1), single class (-1)
        let strength = evaluate_password("90817263");
        assert_eq!(strength.score, 1);
        assert_eq!(strength.label, StrengthLabel::Weak);
    }

    #[test]
    fn long_mixed_password_is_strong() {
        let strength = evaluate_password("Serenity-Prayer-42");
        assert_eq!(strength.score, MAX_SCORE);
        assert_eq!(strength.label, StrengthLabel::Strong);
        assert!(strength.feedback.is_empty());
    }

    #[test]
    fn repeated_characters_cost_a_point() {
        let without = evaluate_password("Recovery#1");
        let with = evaluate_password("Recovvvry#1");
        assert_eq!(without.score, 4);
        assert_eq!(with.score, 3);
        assert!(with
            .feedback
            .iter()
            .any(|f| f.contains("repeating")));
    }

    #[test]
    fn feedback_lists_missing_criteria() {
        let strength = evaluate_password("abc");
        assert_eq!(strength.score, 0);
        assert!(strength.feedback.contains(&"Add a number".to_string()));
        assert!(strength.feedback.contains(&"Add a symbol".to_string()));
        assert!(strength
            .feedback
            .contains(&format!("Use at least {MIN_LENGTH} characters")));
    }
}
