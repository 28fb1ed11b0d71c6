//! Pattern section - repeated runs, sequential runs and keyboard walks.
//!
//! Findings here are qualitative: they produce feedback and suggestions and
//! set breakdown flags, but never move the score.

use secrecy::{ExposeSecret, SecretString};

const KEYBOARD_WALKS: &[&str] = &[
    "qwerty", "qwertz", "azerty", "asdf", "zxcv", "qazwsx", "1qaz", "2wsx", "3edc", "4rfv",
];

const SEQUENTIAL_WINDOW: usize = 4;

/// Qualitative pattern findings for one password.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternFindings {
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub has_patterns: bool,
    pub has_repeated: bool,
}

/// Scans for keyboard walks, sequential runs and repeated characters.
pub fn pattern_section(password: &SecretString) -> PatternFindings {
    let pwd = password.expose_secret();
    let chars: Vec<char> = pwd.chars().collect();
    let mut findings = PatternFindings::default();

    let lowered = pwd.to_lowercase();
    if KEYBOARD_WALKS.iter().any(|walk| lowered.contains(walk)) {
        findings.has_patterns = true;
        findings
            .feedback
            .push("Keyboard pattern detected".to_string());
        findings
            .suggestions
            .push("Avoid keyboard patterns like 'qwerty' or 'asdf'".to_string());
    }

    if has_sequential_run(&chars) {
        findings.has_patterns = true;
        findings
            .feedback
            .push("Sequential pattern detected".to_string());
        findings
            .suggestions
            .push("Avoid sequential characters like '123' or 'abc'".to_string());
    }

    if has_repeated_run(&chars) {
        findings.has_repeated = true;
        findings
            .feedback
            .push("Repeated characters detected".to_string());
        findings
            .suggestions
            .push("Avoid repeating the same character multiple times".to_string());
    }

    findings
}

/// Three or more of the same character in a row.
fn has_repeated_run(chars: &[char]) -> bool {
    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= 3 {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

/// A window of consecutively ascending or descending characters.
fn has_sequential_run(chars: &[char]) -> bool {
    if chars.len() < SEQUENTIAL_WINDOW {
        return false;
    }

    for window in chars.windows(SEQUENTIAL_WINDOW) {
        let ascending = window.windows(2).all(|w| w[1] as i32 == w[0] as i32 + 1);
        let descending = window.windows(2).all(|w| w[1] as i32 == w[0] as i32 - 1);
        if ascending || descending {
            return true;
        }
    }
    false
}
