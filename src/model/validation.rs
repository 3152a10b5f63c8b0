//! Field-level validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A validation rule attached to a form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Anything goes
    #[default]
    None,
    /// Must not be empty
    Required,
    /// `local@domain.tld`
    Email,
    /// A number greater than zero
    PositiveAmount,
    /// Exactly this many digits
    Digits(usize),
}

impl Rule {
    /// Check `value`, returning the message to show next to the field on failure.
    pub fn check(&self, label: &str, value: &str) -> Result<(), String> {
        match self {
            Rule::None => Ok(()),
            Rule::Required => {
                if value.is_empty() {
                    Err(format!("{} is required.", label))
                } else {
                    Ok(())
                }
            }
            Rule::Email => {
                if EMAIL_RE.is_match(value) {
                    Ok(())
                } else {
                    Err("Please enter a valid email address.".to_string())
                }
            }
            Rule::PositiveAmount => match value.trim().parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(()),
                _ => Err("Please enter a valid estimated amount.".to_string()),
            },
            Rule::Digits(n) => {
                let count = value.chars().count();
                if count == *n && value.chars().all(|c| c.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(format!("{} must be {} digits.", label, n))
                }
            }
        }
    }
}
