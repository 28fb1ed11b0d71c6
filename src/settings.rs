//! Consumer settings surface.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Settings the embedding surfaces persist and the engine reads.
///
/// The engine itself only consumes `api_url` and `check_breaches`; the
/// other flags belong to presentation but travel in the same stored object.
/// Field names serialize camelCase to match the extension storage keys, and
/// every field defaults so a missing or partial store is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub auto_analyze: bool,
    pub show_indicators: bool,
    pub check_breaches: bool,
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auto_analyze: true,
            show_indicators: true,
            check_breaches: true,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
