//! Policy configuration.
//!
//! All thresholds the evaluator uses live here so they can be tuned without
//! touching the rules themselves.

use std::collections::HashSet;
use thiserror::Error;

use crate::denylist::{self, DenylistError, default_denylist, load_denylist_from_path};
use crate::types::Rule;

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MEDIUM_THRESHOLD: usize = 3;
pub const DEFAULT_STRONG_THRESHOLD: usize = 5;
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?`~\\";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("medium threshold ({medium}) exceeds strong threshold ({strong})")]
    ThresholdOrder { medium: usize, strong: usize },
    #[error("strong threshold ({0}) exceeds the number of rules ({max})", max = Rule::ALL.len())]
    ThresholdOutOfRange(usize),
    #[error("symbol set is empty")]
    EmptySymbols,
    #[error("invalid PWD_MIN_LENGTH value: {0:?}")]
    InvalidMinLength(String),
    #[error(transparent)]
    Denylist(#[from] DenylistError),
}

/// Rule configuration for the password evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub min_length: usize,
    /// Lowercased common passwords.
    pub denylist: HashSet<String>,
    pub symbols: String,
    pub medium_threshold: usize,
    pub strong_threshold: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            denylist: default_denylist(),
            symbols: DEFAULT_SYMBOLS.to_string(),
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
        }
    }
}

impl PolicyConfig {
    /// Builds a config from the environment, falling back to defaults.
    ///
    /// - `PWD_DENYLIST_PATH`: replaces the built-in denylist with the file contents
    /// - `PWD_MIN_LENGTH`: minimum password length
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = denylist::get_denylist_path() {
            config.denylist = load_denylist_from_path(&path)?;
        }

        if let Ok(raw) = std::env::var(MIN_LENGTH_ENV) {
            config.min_length = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMinLength(raw.clone()))?;
        }

        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min_length = config.min_length,
            denylist = config.denylist.len(),
            "password policy loaded from environment"
        );

        Ok(config)
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_thresholds(mut self, medium: usize, strong: usize) -> Self {
        self.medium_threshold = medium;
        self.strong_threshold = strong;
        self
    }

    pub fn with_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    /// Replaces the denylist. Entries are trimmed and lowercased.
    pub fn with_denylist<'a, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.denylist = denylist::normalize(entries);
        self
    }

    /// Checks that the cut points are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.medium_threshold > self.strong_threshold {
            return Err(ConfigError::ThresholdOrder {
                medium: self.medium_threshold,
                strong: self.strong_threshold,
            });
        }
        if self.strong_threshold > Rule::ALL.len() {
            return Err(ConfigError::ThresholdOutOfRange(self.strong_threshold));
        }
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptySymbols);
        }
        Ok(())
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.symbols.contains(c)
    }
}
