//! Length section - tiered points for password length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;

const MIN_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

/// Scores password length.
///
/// `>= 12` earns 25 points, `>= 8` earns 15, anything shorter earns nothing
/// and a suggestion.
pub fn length_section(password: &SecretString) -> SectionScore {
    let length = password.expose_secret().chars().count();

    if length >= STRONG_LENGTH {
        SectionScore {
            points: 25,
            suggestions: vec![],
        }
    } else if length >= MIN_LENGTH {
        SectionScore {
            points: 15,
            suggestions: vec![],
        }
    } else {
        SectionScore {
            points: 0,
            suggestions: vec![format!("Use at least {} characters", MIN_LENGTH)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_long() {
        let pwd = SecretString::new("TwelveCharss".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.points, 25);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_length_section_mid_tier() {
        let pwd = SecretString::new("12345678".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.points, 15);
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.points, 0);
        assert_eq!(
            outcome.suggestions,
            vec!["Use at least 8 characters".to_string()]
        );
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        let pwd = SecretString::new("pässwörd".to_string().into());
        let outcome = length_section(&pwd);
        assert_eq!(outcome.points, 15);
    }
}
