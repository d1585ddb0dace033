//! Field validation for the settings forms
//!
//! Validation is organized bottom-up:
//! - primitives: shape predicates (IPv4 literal, hostname)
//! - combinator: builds new validators out of existing ones
//! - rules: built-in form rules and ordered per-field rule lists
//! - registry: named custom validators, resolved when rules run
//! - settings: the concrete rule sets of the OTA and access point forms

pub mod combinator;
pub mod primitives;
pub mod registry;
pub mod rules;
pub mod settings;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use combinator::{or, AnyOf};
pub use primitives::{is_hostname, is_ip, IsHostname, IsIp};
pub use registry::ValidatorRegistry;
pub use rules::{FieldRules, Rule};
pub use settings::{ApField, OtaField, SettingsValidator};

/// A pure predicate deciding whether a string value has an acceptable shape.
///
/// Implementations must be stateless and side-effect-free, so one instance can
/// be shared between any number of callers.
pub trait Validator: Send + Sync {
    /// Returns `true` if the candidate is acceptable.
    fn test(&self, candidate: &str) -> bool;

    /// Human-readable description of what the validator expects.
    fn reason(&self) -> &str;
}

/// Adapts a plain function into a [`Validator`].
#[derive(Debug, Clone, Copy)]
pub struct FnValidator {
    predicate: fn(&str) -> bool,
    reason: &'static str,
}

impl FnValidator {
    pub const fn new(predicate: fn(&str) -> bool, reason: &'static str) -> Self {
        Self { predicate, reason }
    }
}

impl Validator for FnValidator {
    fn test(&self, candidate: &str) -> bool {
        (self.predicate)(candidate)
    }

    fn reason(&self) -> &str {
        self.reason
    }
}

/// Reasons a field value or a rule declaration is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value failed a rule; carries the first failing rule's message.
    #[error("{message}")]
    FieldInvalid { rule: String, message: String },

    /// The value was missing altogether.
    #[error("{message}")]
    MalformedInput { message: String },

    #[error("unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("invalid rule declaration: {0}")]
    InvalidRule(String),
}

/// Result of validating a single field, as shown next to the field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldOutcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<Result<(), ValidationError>> for FieldOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(
                ValidationError::FieldInvalid { message, .. }
                | ValidationError::MalformedInput { message },
            ) => Self::invalid(message),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_validator_delegates_to_predicate() {
        let validator = FnValidator::new(|s| s.starts_with("esp"), "must start with esp");

        assert!(validator.test("esp32"));
        assert!(!validator.test("arduino"));
        assert_eq!(validator.reason(), "must start with esp");
    }

    #[test]
    fn outcome_from_field_invalid_carries_message() {
        let outcome = FieldOutcome::from(Err(ValidationError::FieldInvalid {
            rule: "required".to_string(),
            message: "Port is required".to_string(),
        }));

        assert_eq!(outcome, FieldOutcome::invalid("Port is required"));
    }

    #[test]
    fn outcome_from_ok_is_valid() {
        assert_eq!(FieldOutcome::from(Ok(())), FieldOutcome::valid());
    }
}
