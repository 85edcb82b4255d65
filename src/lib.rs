//! Password policy and sign-up form validation library
//!
//! Scores candidate passwords against a configurable rule set and decides
//! whether a sign-up form may be submitted.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`PolicyConfig::from_env`]:
//!
//! - `PWD_DENYLIST_PATH`: file with one common password per line
//!   (default: built-in list)
//! - `PWD_MIN_LENGTH`: minimum password length (default: 8)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, is_form_valid, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc12345!".to_string().into());
//! let confirm = SecretString::new(String::new().into());
//!
//! let result = evaluate(&password);
//! assert!(result.is_valid);
//! assert_eq!(result.strength, PasswordStrength::Strong);
//!
//! assert!(is_form_valid("a@b.com", &password, &confirm, &result, Some("tok")));
//! ```

// Internal modules
mod config;
mod denylist;
mod evaluator;
mod form;
mod roles;
mod sections;
mod types;

// Public API
pub use config::{ConfigError, PolicyConfig};
pub use denylist::{DenylistError, default_denylist, get_denylist_path, is_denied, load_denylist_from_path};
pub use evaluator::{evaluate, evaluate_with};
pub use form::{FormHint, FormValidationState, SignupForm, is_form_valid, validate_form};
pub use roles::{Role, RoleParseError, redirect_path};
pub use types::{PasswordStrength, PasswordValidationResult, Rule};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
