//! Sign-up form validation.
//!
//! Combines the password evaluation with the other field checks to decide
//! whether the form may be submitted, and which hints to show otherwise.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::types::PasswordValidationResult;

/// Reason a form cannot be submitted yet, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormHint {
    MissingEmail,
    MissingPassword,
    /// Carries the password rule messages.
    WeakPassword(Vec<String>),
    PasswordMismatch,
    MissingChallenge,
}

impl fmt::Display for FormHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormHint::MissingEmail => f.write_str("Email is required"),
            FormHint::MissingPassword => f.write_str("Password is required"),
            FormHint::WeakPassword(errors) => write!(f, "Password is too weak: {}", errors.join("; ")),
            FormHint::PasswordMismatch => f.write_str("Passwords do not match"),
            FormHint::MissingChallenge => f.write_str("Please complete the verification challenge"),
        }
    }
}

/// Snapshot of a form's validity for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationState {
    pub is_valid: bool,
    pub reasons: Vec<FormHint>,
}

impl FormValidationState {
    pub fn messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// Borrowed view over the sign-up fields.
#[derive(Debug, Clone, Copy)]
pub struct SignupForm<'a> {
    pub email: &'a str,
    pub password: &'a SecretString,
    pub confirm_password: &'a SecretString,
    pub challenge_token: Option<&'a str>,
}

impl SignupForm<'_> {
    pub fn validate(&self, password_result: &PasswordValidationResult) -> FormValidationState {
        validate_form(
            self.email,
            self.password,
            self.confirm_password,
            password_result,
            self.challenge_token,
        )
    }
}

/// Collects every reason the form is not yet submittable.
///
/// The confirmation is only compared once the user has started typing it:
/// an empty `confirm_password` never produces [`FormHint::PasswordMismatch`].
pub fn validate_form(
    email: &str,
    password: &SecretString,
    confirm_password: &SecretString,
    password_result: &PasswordValidationResult,
    challenge_token: Option<&str>,
) -> FormValidationState {
    let password = password.expose_secret();
    let confirm = confirm_password.expose_secret();
    let mut reasons = Vec::new();

    if email.is_empty() {
        reasons.push(FormHint::MissingEmail);
    }
    if password.is_empty() {
        reasons.push(FormHint::MissingPassword);
    }
    if !password_result.is_valid {
        reasons.push(FormHint::WeakPassword(password_result.errors.clone()));
    }
    if !confirm.is_empty() && confirm != password {
        reasons.push(FormHint::PasswordMismatch);
    }
    if challenge_token.is_none_or(str::is_empty) {
        reasons.push(FormHint::MissingChallenge);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(hints = reasons.len(), "form validated");

    FormValidationState {
        is_valid: reasons.is_empty(),
        reasons,
    }
}

/// True iff the form may be submitted.
pub fn is_form_valid(
    email: &str,
    password: &SecretString,
    confirm_password: &SecretString,
    password_result: &PasswordValidationResult,
    challenge_token: Option<&str>,
) -> bool {
    validate_form(email, password, confirm_password, password_result, challenge_token).is_valid
}
