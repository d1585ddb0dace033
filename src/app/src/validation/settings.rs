use log::{debug, error};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::registry::IS_IP_OR_HOSTNAME;
use super::{FieldOutcome, FieldRules, Rule, ValidatorRegistry};
use crate::policy::is_access_point_enabled;
use crate::types::{ApSettings, OtaFormData};

pub const OTA_PORT_MIN: f64 = 1025.0;
pub const OTA_PORT_MAX: f64 = 65535.0;

static OTA_PORT_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .rule(Rule::Required, "Port is required")
        .rule(Rule::IsNumber, "Must be a number")
        .rule(Rule::MinNumber(OTA_PORT_MIN), "Must be greater than 1024")
        .rule(Rule::MaxNumber(OTA_PORT_MAX), "Max value is 65535")
});

static OTA_PASSWORD_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .rule(Rule::Required, "OTA Password is required")
        .rule(
            pattern("^.{1,64}$"),
            "OTA Password must be 64 characters or less",
        )
});

static NO_RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::new);

static AP_SSID_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .rule(Rule::Required, "Access Point SSID is required")
        .rule(
            pattern("^.{1,32}$"),
            "Access Point SSID must be 32 characters or less",
        )
});

static AP_PASSWORD_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .rule(Rule::Required, "Access Point Password is required")
        .rule(
            pattern("^.{8,64}$"),
            "Access Point Password must be 8-64 characters",
        )
});

static AP_HOST_RULES: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new()
        .rule(Rule::Required, "Host is required")
        .rule(
            Rule::custom(IS_IP_OR_HOSTNAME),
            "Must be an IP address or hostname",
        )
});

fn pattern(regex: &str) -> Rule {
    Rule::match_regexp(regex).expect("static pattern must compile")
}

/// Fields of the OTA settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtaField {
    Enabled,
    Port,
    Password,
}

impl OtaField {
    pub const ALL: [Self; 3] = [Self::Enabled, Self::Port, Self::Password];

    /// Key used in the form's error map
    pub fn name(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Port => "port",
            Self::Password => "password",
        }
    }

    pub fn value(self, data: &OtaFormData) -> String {
        match self {
            Self::Enabled => data.enabled.to_string(),
            Self::Port => data.port.clone(),
            Self::Password => data.password.clone(),
        }
    }

    fn rules(self) -> &'static FieldRules {
        match self {
            Self::Enabled => &NO_RULES,
            Self::Port => &OTA_PORT_RULES,
            Self::Password => &OTA_PASSWORD_RULES,
        }
    }
}

/// Fields of the access point settings form that carry rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApField {
    Ssid,
    Password,
    Host,
}

impl ApField {
    pub const ALL: [Self; 3] = [Self::Ssid, Self::Password, Self::Host];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ssid => "ssid",
            Self::Password => "password",
            Self::Host => "host",
        }
    }

    /// `None` for a host the firmware does not expose
    pub fn value(self, settings: &ApSettings) -> Option<&str> {
        match self {
            Self::Ssid => Some(settings.ssid.as_str()),
            Self::Password => Some(settings.password.as_str()),
            Self::Host => settings.host.as_deref(),
        }
    }

    fn rules(self) -> &'static FieldRules {
        match self {
            Self::Ssid => &AP_SSID_RULES,
            Self::Password => &AP_PASSWORD_RULES,
            Self::Host => &AP_HOST_RULES,
        }
    }
}

/// Applies the settings rule sets through a validator registry
#[derive(Debug, Clone)]
pub struct SettingsValidator {
    registry: ValidatorRegistry,
}

impl Default for SettingsValidator {
    fn default() -> Self {
        Self::new(ValidatorRegistry::with_defaults())
    }
}

impl SettingsValidator {
    pub fn new(registry: ValidatorRegistry) -> Self {
        for field in ApField::ALL {
            if let Err(e) = registry.ensure_registered(field.rules()) {
                error!("access point field `{}`: {e}", field.name());
            }
        }
        Self { registry }
    }

    pub fn check_ota_field(&self, field: OtaField, data: &OtaFormData) -> FieldOutcome {
        let value = field.value(data);
        let outcome = self.registry.check(Some(value.as_str()), field.rules());
        debug!("ota field `{}` validated: {outcome:?}", field.name());
        outcome
    }

    /// Messages of all failing OTA fields, keyed by field name
    pub fn check_ota(&self, data: &OtaFormData) -> HashMap<String, String> {
        OtaField::ALL
            .into_iter()
            .filter_map(|field| {
                self.check_ota_field(field, data)
                    .message
                    .map(|message| (field.name().to_string(), message))
            })
            .collect()
    }

    /// Validate one access point field. Fields of a disabled access point and
    /// an absent host are always valid.
    pub fn check_ap_field(&self, field: ApField, settings: &ApSettings) -> FieldOutcome {
        if !is_access_point_enabled(settings) {
            return FieldOutcome::valid();
        }
        let Some(value) = field.value(settings) else {
            return FieldOutcome::valid();
        };

        let outcome = self.registry.check(Some(value), field.rules());
        debug!("access point field `{}` validated: {outcome:?}", field.name());
        outcome
    }

    pub fn check_access_point(&self, settings: &ApSettings) -> HashMap<String, String> {
        ApField::ALL
            .into_iter()
            .filter_map(|field| {
                self.check_ap_field(field, settings)
                    .message
                    .map(|message| (field.name().to_string(), message))
            })
            .collect()
    }
}
