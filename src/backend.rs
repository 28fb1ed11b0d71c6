//! Backend HTTP client: breach checks, remote analysis and generation.
//!
//! Every operation degrades locally on failure. Transport errors, non-2xx
//! statuses and malformed bodies all take the same path: the caller gets a
//! usable result, never an error.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::generate_password;
use crate::settings::Settings;
use crate::types::{AnalysisResult, BreachStatus, GenerationOptions, ScoreBreakdown, Strength};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Internal failure taxonomy; callers only ever observe the degraded
/// results these map to.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Serialize)]
struct PasswordRequest<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
struct BreachCheckResponse {
    breached: bool,
    breach_count: u64,
    message: String,
}

#[derive(Deserialize)]
struct FullAnalysisResponse {
    score: u8,
    #[serde(default)]
    feedback: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    details: Option<ScoreBreakdown>,
    breached: bool,
    breach_count: u64,
    breach_message: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    password: String,
}

/// Client for the breach-check service.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(settings: &Settings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client");

        BackendClient {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Looks the password up in the breach database.
    ///
    /// On success the remote `breached`/`count`/`message` fields pass
    /// through verbatim with `checked: true`. On any failure the result is
    /// [`BreachStatus::unchecked`], whose message says the check did not
    /// run - it never claims the password is safe.
    pub async fn check_breach(&self, password: &SecretString) -> BreachStatus {
        match self.try_check_breach(password).await {
            Ok(status) => status,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach check unavailable, degrading: {}", _err);
                BreachStatus::unchecked()
            }
        }
    }

    async fn try_check_breach(
        &self,
        password: &SecretString,
    ) -> Result<BreachStatus, BackendError> {
        let response = self
            .http
            .post(format!("{}/api/breach-check", self.base_url))
            .json(&PasswordRequest {
                password: password.expose_secret(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body: BreachCheckResponse = response.json().await?;
        Ok(BreachStatus {
            breached: body.breached,
            count: if body.breached { body.breach_count } else { 0 },
            message: body.message,
            checked: true,
        })
    }

    /// Requests the complete remote analysis (strength plus breach data).
    ///
    /// Returns `None` on any failure; callers then score locally and merge
    /// an unchecked breach status.
    pub async fn full_analysis(&self, password: &SecretString) -> Option<AnalysisResult> {
        match self.try_full_analysis(password).await {
            Ok(result) => Some(result),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("full analysis unavailable, caller falls back: {}", _err);
                None
            }
        }
    }

    async fn try_full_analysis(
        &self,
        password: &SecretString,
    ) -> Result<AnalysisResult, BackendError> {
        let response = self
            .http
            .post(format!("{}/api/full-analysis", self.base_url))
            .json(&PasswordRequest {
                password: password.expose_secret(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body: FullAnalysisResponse = response.json().await?;

        // The label is recomputed from the score rather than trusted from
        // the wire, keeping strength a pure function of score.
        let score = body.score.min(100);
        let strength = Strength::from_score(score);
        Ok(AnalysisResult {
            score,
            strength,
            strength_color: strength.color(),
            feedback: body.feedback,
            suggestions: body.suggestions,
            breached: body.breached,
            breach_count: if body.breached { body.breach_count } else { 0 },
            breach_message: body.breach_message,
            breach_checked: true,
            details: body.details,
        })
    }

    /// Generates a password remotely, falling back to the in-process secure
    /// generator on any failure. Never fails.
    pub async fn generate(&self, options: &GenerationOptions) -> String {
        match self.try_generate(options).await {
            Ok(password) => password,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("remote generation unavailable, generating locally: {}", _err);
                generate_password(options)
            }
        }
    }

    async fn try_generate(&self, options: &GenerationOptions) -> Result<String, BackendError> {
        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(options)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.password)
    }
}
