//! Result types produced by the evaluator.

use std::fmt;

/// A single password rule. Rules are always checked in [`Rule::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
    Denylist,
}

impl Rule {
    /// Fixed check order.
    pub const ALL: [Rule; 6] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Symbol,
        Rule::Denylist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Symbol => "symbol",
            Rule::Denylist => "denylist",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Buckets a satisfied-rule count against the given cut points.
    pub fn from_satisfied(satisfied: usize, medium_threshold: usize, strong_threshold: usize) -> Self {
        if satisfied >= strong_threshold {
            PasswordStrength::Strong
        } else if satisfied >= medium_threshold {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        f.write_str(label)
    }
}

/// Outcome of evaluating one password.
///
/// `errors` and `failed` are parallel: `errors[i]` is the message for `failed[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub strength: PasswordStrength,
    pub errors: Vec<String>,
    pub failed: Vec<Rule>,
}

impl PasswordValidationResult {
    pub(crate) fn from_failures(
        failures: Vec<(Rule, String)>,
        medium_threshold: usize,
        strong_threshold: usize,
    ) -> Self {
        let satisfied = Rule::ALL.len() - failures.len();
        let (failed, errors): (Vec<Rule>, Vec<String>) = failures.into_iter().unzip();
        Self {
            is_valid: errors.is_empty(),
            strength: PasswordStrength::from_satisfied(satisfied, medium_threshold, strong_threshold),
            errors,
            failed,
        }
    }

    /// Number of rules the password satisfied.
    pub fn satisfied(&self) -> usize {
        Rule::ALL.len() - self.failed.len()
    }

    pub fn has_failed(&self, rule: Rule) -> bool {
        self.failed.contains(&rule)
    }
}
