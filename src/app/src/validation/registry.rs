use log::error;
use std::collections::HashMap;
use std::sync::Arc;

use super::{or, FieldOutcome, FieldRules, IsHostname, IsIp, Rule, ValidationError, Validator};

pub const IS_IP: &str = "isIP";
pub const IS_HOSTNAME: &str = "isHostname";
pub const IS_IP_OR_HOSTNAME: &str = "isIPOrHostname";

/// Named custom validators available to [`Rule::Custom`] rules
///
/// The registry is built once when the app starts and handed to the form
/// handlers by reference. Registering an existing name replaces the previous
/// validator.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<dyn Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the address validators used by the settings forms
    pub fn with_defaults() -> Self {
        let ip: Arc<dyn Validator> = Arc::new(IsIp);
        let hostname: Arc<dyn Validator> = Arc::new(IsHostname);

        let mut registry = Self::new();
        registry.register_shared(IS_IP, ip.clone());
        registry.register_shared(IS_HOSTNAME, hostname.clone());
        registry.register(IS_IP_OR_HOSTNAME, or([ip, hostname]));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, validator: impl Validator + 'static) {
        self.register_shared(name, Arc::new(validator));
    }

    pub fn register_shared(&mut self, name: impl Into<String>, validator: Arc<dyn Validator>) {
        self.validators.insert(name.into(), validator);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Fail with the first custom rule that has no registered validator
    pub fn ensure_registered(&self, rules: &FieldRules) -> Result<(), ValidationError> {
        rules
            .iter()
            .find_map(|(rule, _)| match rule {
                Rule::Custom(name) if !self.contains(name) => Some(name.clone()),
                _ => None,
            })
            .map_or(Ok(()), |name| Err(ValidationError::UnknownRule(name)))
    }

    /// Run the rules in order and fail with the first failing rule's message.
    ///
    /// A missing value fails the first rule as [`ValidationError::MalformedInput`].
    /// A field without rules always passes.
    pub fn validate(
        &self,
        value: Option<&str>,
        rules: &FieldRules,
    ) -> Result<(), ValidationError> {
        let mut rules = rules.iter();

        let Some(value) = value else {
            return match rules.next() {
                Some((_, message)) => Err(ValidationError::MalformedInput {
                    message: message.to_string(),
                }),
                None => Ok(()),
            };
        };

        match rules.find(|(rule, _)| !self.passes(rule, value)) {
            Some((rule, message)) => Err(ValidationError::FieldInvalid {
                rule: rule.name(),
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Same as [`validate`](Self::validate), shaped for display next to a field
    pub fn check(&self, value: Option<&str>, rules: &FieldRules) -> FieldOutcome {
        self.validate(value, rules).into()
    }

    fn passes(&self, rule: &Rule, value: &str) -> bool {
        if let Some(passes) = rule.check_builtin(value) {
            return passes;
        }

        let name = rule.name();
        match self.validators.get(&name) {
            Some(validator) => validator.test(value),
            None => {
                error!("validation rule `{name}` is not registered");
                false
            }
        }
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.validators.keys().collect();
        names.sort();
        f.debug_struct("ValidatorRegistry")
            .field("validators", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FnValidator;

    fn port_rules() -> FieldRules {
        FieldRules::parse([
            ("required", "Port is required"),
            ("isNumber", "Must be a number"),
            ("minNumber:1025", "Must be greater than 1024"),
            ("maxNumber:65535", "Max value is 65535"),
        ])
        .unwrap()
    }

    fn host_rules() -> FieldRules {
        FieldRules::parse([(IS_IP_OR_HOSTNAME, "Must be an IP address or hostname")]).unwrap()
    }

    mod registration {
        use super::*;

        #[test]
        fn defaults_register_address_validators() {
            let registry = ValidatorRegistry::with_defaults();

            assert!(registry.contains(IS_IP));
            assert!(registry.contains(IS_HOSTNAME));
            assert!(registry.contains(IS_IP_OR_HOSTNAME));
        }

        #[test]
        fn reports_unregistered_custom_rules() {
            assert_eq!(
                ValidatorRegistry::new().ensure_registered(&host_rules()),
                Err(ValidationError::UnknownRule(IS_IP_OR_HOSTNAME.to_string()))
            );
            assert_eq!(
                ValidatorRegistry::with_defaults().ensure_registered(&host_rules()),
                Ok(())
            );
        }

        #[test]
        fn re_registration_overwrites_silently() {
            let mut registry = ValidatorRegistry::new();
            registry.register("isEsp", FnValidator::new(|s| s == "esp8266", "esp8266"));
            registry.register("isEsp", FnValidator::new(|s| s == "esp32", "esp32"));

            let rules = FieldRules::new().rule(Rule::custom("isEsp"), "Unknown board");
            assert!(registry.check(Some("esp32"), &rules).valid);
            assert!(!registry.check(Some("esp8266"), &rules).valid);
        }

        #[test]
        fn registering_equal_validators_twice_is_idempotent() {
            let mut once = ValidatorRegistry::new();
            once.register(
                IS_IP_OR_HOSTNAME,
                or([
                    Arc::new(IsIp) as Arc<dyn Validator>,
                    Arc::new(IsHostname) as Arc<dyn Validator>,
                ]),
            );

            let mut twice = once.clone();
            twice.register(
                IS_IP_OR_HOSTNAME,
                or([
                    Arc::new(IsIp) as Arc<dyn Validator>,
                    Arc::new(IsHostname) as Arc<dyn Validator>,
                ]),
            );

            let rules = host_rules();
            for candidate in ["10.0.0.5", "my-device", "!!!", "", "-bad.com"] {
                assert_eq!(
                    once.check(Some(candidate), &rules),
                    twice.check(Some(candidate), &rules),
                    "{candidate}"
                );
            }
        }
    }

    mod evaluation {
        use super::*;

        #[test]
        fn port_field_outcomes() {
            let registry = ValidatorRegistry::with_defaults();
            let rules = port_rules();

            assert_eq!(
                registry.check(Some("1024"), &rules),
                FieldOutcome::invalid("Must be greater than 1024")
            );
            assert_eq!(registry.check(Some("1025"), &rules), FieldOutcome::valid());
            assert_eq!(registry.check(Some("65535"), &rules), FieldOutcome::valid());
            assert_eq!(
                registry.check(Some("65536"), &rules),
                FieldOutcome::invalid("Max value is 65535")
            );
            assert_eq!(
                registry.check(Some("abc"), &rules),
                FieldOutcome::invalid("Must be a number")
            );
        }

        #[test]
        fn reports_only_first_failing_rule() {
            let registry = ValidatorRegistry::with_defaults();

            assert_eq!(
                registry.validate(Some(""), &port_rules()),
                Err(ValidationError::FieldInvalid {
                    rule: "required".to_string(),
                    message: "Port is required".to_string(),
                })
            );
        }

        #[test]
        fn custom_rules_resolve_through_registry() {
            let registry = ValidatorRegistry::with_defaults();
            let rules = host_rules();

            assert!(registry.check(Some("10.0.0.5"), &rules).valid);
            assert!(registry.check(Some("my-device"), &rules).valid);
            assert_eq!(
                registry.check(Some("!!!"), &rules),
                FieldOutcome::invalid("Must be an IP address or hostname")
            );
        }

        #[test]
        fn missing_value_is_malformed_input() {
            let registry = ValidatorRegistry::with_defaults();

            assert_eq!(
                registry.validate(None, &port_rules()),
                Err(ValidationError::MalformedInput {
                    message: "Port is required".to_string(),
                })
            );
            assert_eq!(
                registry.check(None, &host_rules()),
                FieldOutcome::invalid("Must be an IP address or hostname")
            );
        }

        #[test]
        fn field_without_rules_is_valid() {
            let registry = ValidatorRegistry::new();

            assert!(registry.check(Some(""), &FieldRules::new()).valid);
            assert!(registry.check(None, &FieldRules::new()).valid);
        }

        #[test]
        fn unregistered_custom_rule_fails() {
            let registry = ValidatorRegistry::new();

            assert_eq!(
                registry.check(Some("10.0.0.5"), &host_rules()),
                FieldOutcome::invalid("Must be an IP address or hostname")
            );
        }
    }
}
