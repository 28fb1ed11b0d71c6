//! Password security evaluation engine
//!
//! Deterministic strength scoring, breach checking with a local degraded
//! fallback, secure and memorable password generation, and a debounced
//! per-field evaluation pipeline. Every surface that embeds the engine
//! (extension content script, popup, web app) consumes this one crate, so
//! scoring and fallback behavior cannot drift between them.
//!
//! # Features
//!
//! - `async` (default): Enables the backend client and debounced
//!   evaluation sessions
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze_offline, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng!Passw0rd123".to_string().into());
//! let result = analyze_offline(&password);
//!
//! assert_eq!(result.strength, Strength::Strong);
//! assert!(!result.breach_checked); // no backend involved
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod memorable;
mod sections;
mod settings;
mod types;

#[cfg(feature = "async")]
mod backend;
#[cfg(feature = "async")]
mod session;

// Public API
pub use blacklist::{BlacklistError, init_blacklist, init_blacklist_from_path, is_common};
pub use evaluator::{analyze_offline, evaluate_password_strength};
pub use generator::{build_charset, generate_password};
pub use memorable::{
    MemorablePassword, MemorableStyle, generate_memorable, generate_memorable_with,
};
pub use settings::{DEFAULT_API_URL, Settings};
pub use types::{
    AnalysisResult, BreachStatus, Evaluation, GenerationOptions, ScoreBreakdown, Strength,
};

#[cfg(feature = "async")]
pub use backend::{BackendClient, BackendError};
#[cfg(feature = "async")]
pub use session::{
    DEFAULT_DEBOUNCE, EvaluationSession, FIELD_MIN_PASSWORD_LENGTH, PAGE_MIN_PASSWORD_LENGTH,
    SessionConfig, SessionEvent,
};
