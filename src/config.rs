//! Configuration handling for the signup form

use crate::state::ValidationRules;
use crate::submit::DEFAULT_SUBMIT_DELAY;
use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the simulated submit latency
const SUBMIT_DELAY_ENV: &str = "SIGNUP_SUBMIT_DELAY_MS";

/// User configuration for the signup form
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SignupConfig {
    /// Simulated submit latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Require the terms checkbox to be checked before submitting
    pub require_terms_acceptance: Option<bool>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_delay_override(std::env::var(SUBMIT_DELAY_ENV).ok().as_deref());
        Ok(config)
    }

    /// Read configuration from `path`, falling back to defaults when it is missing
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply the raw value of the submit delay environment variable, if set
    fn apply_delay_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        match raw.trim().parse() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={raw}"),
        }
    }

    /// Simulated latency of the mock submit handler
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    /// Validation ruleset for the form
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            require_terms_acceptance: self.require_terms_acceptance.unwrap_or(false),
        }
    }
}
