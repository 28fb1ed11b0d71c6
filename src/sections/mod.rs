//! Password evaluation sections
//!
//! Each section inspects one aspect of the password and reports the points
//! it contributes, plus any user-facing feedback or suggestion.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::{CommonPasswordOutcome, common_password_section};
pub use length::length_section;
pub use pattern::{PatternFindings, pattern_section};
pub use variety::{VarietyFlags, character_variety_section};

/// The fixed symbol set counted as "special characters" by the scorer.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Points and advice produced by one additive section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionScore {
    /// Points this section adds during the additive pass.
    pub points: u8,
    /// Actionable advice for each unmet criterion, in check order.
    pub suggestions: Vec<String>,
}
