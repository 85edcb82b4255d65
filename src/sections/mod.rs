//! Password rule sections
//!
//! Each section checks one rule and reports a reason when it fails.

mod denylist;
mod length;
mod variety;

pub use denylist::denylist_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

use crate::config::PolicyConfig;
use crate::types::Rule;
use secrecy::SecretString;

/// Result type for section functions.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type SectionResult = Option<String>;

pub type SectionFn = fn(&SecretString, &PolicyConfig) -> SectionResult;

/// Returns the section that checks `rule`.
pub fn section_for(rule: Rule) -> SectionFn {
    match rule {
        Rule::Length => length_section,
        Rule::Uppercase => uppercase_section,
        Rule::Lowercase => lowercase_section,
        Rule::Digit => digit_section,
        Rule::Symbol => symbol_section,
        Rule::Denylist => denylist_section,
    }
}
