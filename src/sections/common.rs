//! Common-password section - penalty for known-weak passwords.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_common;

/// Score after the penalty, plus the membership flag and feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswordOutcome {
    pub score: u8,
    pub is_common: bool,
    pub feedback: Option<String>,
}

/// Applies the common-password penalty to an additive score.
///
/// Membership is case-insensitive. A hit drops the score by 50 points with
/// a floor of 5, so a common password can never escape the Weak band.
pub fn common_password_section(password: &SecretString, score: u8) -> CommonPasswordOutcome {
    if is_common(password.expose_secret()) {
        CommonPasswordOutcome {
            score: score.saturating_sub(50).max(5),
            is_common: true,
            feedback: Some("This is a commonly used password!".to_string()),
        }
    } else {
        CommonPasswordOutcome {
            score,
            is_common: false,
            feedback: None,
        }
    }
}
