use std::sync::Arc;

use super::Validator;

/// Validator accepting a value if any of its constituents accepts it
///
/// Constituents are tried in order and evaluation stops at the first match.
/// With no constituents every value is rejected.
#[derive(Clone)]
pub struct AnyOf {
    validators: Vec<Arc<dyn Validator>>,
    reason: String,
}

impl AnyOf {
    pub fn new(validators: Vec<Arc<dyn Validator>>) -> Self {
        let reason = validators
            .iter()
            .map(|v| v.reason())
            .collect::<Vec<_>>()
            .join(" or ");
        Self { validators, reason }
    }

    /// Replace the generated reason with a custom one.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for AnyOf {
    fn test(&self, candidate: &str) -> bool {
        self.validators.iter().any(|v| v.test(candidate))
    }

    fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("validators", &self.validators.len())
            .field("reason", &self.reason)
            .finish()
    }
}

/// Combine validators with a logical OR.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use espconfig_ui_core::validation::{or, IsHostname, IsIp, Validator};
///
/// let ip_or_host = or([
///     Arc::new(IsIp) as Arc<dyn Validator>,
///     Arc::new(IsHostname) as Arc<dyn Validator>,
/// ]);
/// assert!(ip_or_host.test("10.0.0.5"));
/// assert!(ip_or_host.test("my-device"));
/// assert!(!ip_or_host.test("!!!"));
/// ```
pub fn or<I>(validators: I) -> AnyOf
where
    I: IntoIterator<Item = Arc<dyn Validator>>,
{
    AnyOf::new(validators.into_iter().collect())
}
