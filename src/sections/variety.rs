//! Character variety section - points per character class present.

use secrecy::{ExposeSecret, SecretString};

use super::{SYMBOLS, SectionScore};

/// Which character classes the password contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarietyFlags {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
}

/// Scores character variety.
///
/// Independent checks in fixed order: uppercase (+20), lowercase (+15),
/// digits (+20), symbols from the fixed set (+20). Each unmet check yields
/// one suggestion, in the same order.
pub fn character_variety_section(password: &SecretString) -> (SectionScore, VarietyFlags) {
    let pwd = password.expose_secret();

    let flags = VarietyFlags {
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_numbers: pwd.chars().any(|c| c.is_ascii_digit()),
        has_symbols: pwd.chars().any(|c| SYMBOLS.contains(c)),
    };

    let mut outcome = SectionScore::default();

    let checks: [(bool, u8, &str); 4] = [
        (flags.has_uppercase, 20, "Add uppercase letters (A-Z)"),
        (flags.has_lowercase, 15, "Add lowercase letters (a-z)"),
        (flags.has_numbers, 20, "Add numbers (0-9)"),
        (flags.has_symbols, 20, "Add special characters"),
    ];

    for (present, points, suggestion) in checks {
        if present {
            outcome.points += points;
        } else {
            outcome.suggestions.push(suggestion.to_string());
        }
    }

    (outcome, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_all_classes() {
        let pwd = SecretString::new("HasAll123!".to_string().into());
        let (outcome, flags) = character_variety_section(&pwd);
        assert_eq!(outcome.points, 75);
        assert!(outcome.suggestions.is_empty());
        assert!(flags.has_uppercase && flags.has_lowercase);
        assert!(flags.has_numbers && flags.has_symbols);
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        let (outcome, flags) = character_variety_section(&pwd);
        assert_eq!(outcome.points, 55);
        assert_eq!(
            outcome.suggestions,
            vec!["Add uppercase letters (A-Z)".to_string()]
        );
        assert!(!flags.has_uppercase);
    }

    #[test]
    fn test_variety_section_lowercase_only() {
        let pwd = SecretString::new("onlyletters".to_string().into());
        let (outcome, _) = character_variety_section(&pwd);
        assert_eq!(outcome.points, 15);
        assert_eq!(outcome.suggestions.len(), 3);
        // Suggestions keep check order.
        assert!(outcome.suggestions[0].contains("uppercase"));
        assert!(outcome.suggestions[1].contains("numbers"));
        assert!(outcome.suggestions[2].contains("special"));
    }

    #[test]
    fn test_variety_section_symbol_outside_fixed_set() {
        // Space is not in the scored symbol set.
        let pwd = SecretString::new("with space".to_string().into());
        let (_, flags) = character_variety_section(&pwd);
        assert!(!flags.has_symbols);
    }

    #[test]
    fn test_variety_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        let (outcome, flags) = character_variety_section(&pwd);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.suggestions.len(), 4);
        assert_eq!(flags, VarietyFlags::default());
    }
}
