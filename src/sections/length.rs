//! Length section - checks password minimum length.

use super::SectionResult;
use crate::config::PolicyConfig;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password meets the configured minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString, config: &PolicyConfig) -> SectionResult {
    if password.expose_secret().chars().count() < config.min_length {
        return Some(format!(
            "Password must be at least {} characters",
            config.min_length
        ));
    }
    None
}
