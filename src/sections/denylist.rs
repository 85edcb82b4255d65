//! Denylist section - rejects common passwords.

use super::SectionResult;
use crate::config::PolicyConfig;
use crate::denylist::is_denied;
use secrecy::{ExposeSecret, SecretString};

/// Checks the password against the configured denylist (case-insensitive).
///
/// The empty password is always denied.
///
/// # Returns
/// - `Some(reason)` if password is empty or denylisted
/// - `None` otherwise
pub fn denylist_section(password: &SecretString, config: &PolicyConfig) -> SectionResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() || is_denied(&config.denylist, pwd) {
        return Some("Password is too common".to_string());
    }
    None
}
