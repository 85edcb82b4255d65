//! Character variety sections - uppercase, lowercase, digits, symbols.
//!
//! Each character class is its own rule so every missing class yields its own reason.

use super::SectionResult;
use crate::config::PolicyConfig;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password contains at least one uppercase letter.
///
/// # Returns
/// - `Some(reason)` if no uppercase letter is present
/// - `None` otherwise
pub fn uppercase_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_uppercase()) {
        return Some("Password must contain an uppercase letter".to_string());
    }
    None
}

/// Checks that the password contains at least one lowercase letter.
///
/// # Returns
/// - `Some(reason)` if no lowercase letter is present
/// - `None` otherwise
pub fn lowercase_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_lowercase()) {
        return Some("Password must contain a lowercase letter".to_string());
    }
    None
}

/// Checks that the password contains at least one ASCII digit.
///
/// # Returns
/// - `Some(reason)` if no digit is present
/// - `None` otherwise
pub fn digit_section(password: &SecretString, _config: &PolicyConfig) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain a number".to_string());
    }
    None
}

/// Checks that the password contains a character from the configured symbol set.
///
/// Whitespace and other non-alphanumerics outside the set do not count.
///
/// # Returns
/// - `Some(reason)` if no symbol is present
/// - `None` otherwise
pub fn symbol_section(password: &SecretString, config: &PolicyConfig) -> SectionResult {
    if !password.expose_secret().chars().any(|c| config.is_symbol(c)) {
        return Some("Password must contain a special character".to_string());
    }
    None
}
