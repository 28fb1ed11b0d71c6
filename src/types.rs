//! Shared result and option types for the evaluation engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative strength label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Weak,
    Medium,
    Good,
    Strong,
}

impl Strength {
    /// Maps a score in `[0, 100]` to its label.
    ///
    /// Thresholds are closed and non-overlapping, evaluated high to low:
    /// `>=80` Strong, `>=60` Good, `>=40` Medium, otherwise Weak.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Strength::Strong
        } else if score >= 60 {
            Strength::Good
        } else if score >= 40 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    /// Presentation hint for this label. Fixed lookup, total.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Strong => "#22c55e",
            Strength::Good => "#84cc16",
            Strength::Medium => "#eab308",
            Strength::Weak => "#ef4444",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Per-check composition facts derived from one password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    pub is_common: bool,
    pub has_patterns: bool,
    pub has_repeated: bool,
}

/// Locally computed strength evaluation, before breach status is merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: u8,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

impl Evaluation {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

/// Outcome of one breach lookup.
///
/// `checked` separates "verified against the breach database" from "the
/// check could not run" - the two must never be conflated, even though both
/// report `breached: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachStatus {
    pub breached: bool,
    pub count: u64,
    pub message: String,
    pub checked: bool,
}

impl BreachStatus {
    /// Degraded result for any path where the lookup did not run.
    pub fn unchecked() -> Self {
        BreachStatus {
            breached: false,
            count: 0,
            message: "Breach check requires backend connection".to_string(),
            checked: false,
        }
    }
}

/// Unified analysis output delivered to presentation layers.
///
/// `strength` is a pure function of `score`, and `strength_color` of
/// `strength`; both are filled in by [`AnalysisResult::from_parts`] rather
/// than set by callers. `breached == false` implies `breach_count == 0`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub strength: Strength,
    pub strength_color: &'static str,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub breached: bool,
    pub breach_count: u64,
    pub breach_message: String,
    pub breach_checked: bool,
    pub details: Option<ScoreBreakdown>,
}

impl AnalysisResult {
    /// Merges a local evaluation with a breach lookup outcome.
    pub fn from_parts(evaluation: Evaluation, breach: BreachStatus) -> Self {
        let strength = evaluation.strength();
        let breach_count = if breach.breached { breach.count } else { 0 };
        AnalysisResult {
            score: evaluation.score,
            strength,
            strength_color: strength.color(),
            feedback: evaluation.feedback,
            suggestions: evaluation.suggestions,
            breached: breach.breached,
            breach_count,
            breach_message: breach.message,
            breach_checked: breach.checked,
            details: Some(evaluation.breakdown),
        }
    }
}

/// Options for secure password generation.
///
/// Serializes to the snake_case body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: true,
        }
    }
}
