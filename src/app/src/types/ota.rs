use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Over-the-air update settings as stored on the device
///
/// The bounds are only enforced when the record is validated before saving;
/// a loaded record is kept as the device reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OtaSettings {
    pub enabled: bool,
    #[validate(minimum = 1025)]
    #[validate(maximum = 65535)]
    pub port: u32,
    #[validate(min_length = 1)]
    #[validate(max_length = 64)]
    pub password: String,
}

/// Editable OTA form record
///
/// The port is kept as the raw input text so the form can hold values like
/// `"abc"` or `""` while the user is typing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtaFormData {
    pub enabled: bool,
    pub port: String,
    pub password: String,
}

impl From<&OtaSettings> for OtaFormData {
    fn from(settings: &OtaSettings) -> Self {
        Self {
            enabled: settings.enabled,
            port: settings.port.to_string(),
            password: settings.password.clone(),
        }
    }
}

impl OtaFormData {
    /// Convert back to the stored record; only meaningful once the form passed validation.
    pub fn to_settings(&self) -> Result<OtaSettings, String> {
        let port = self
            .port
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid port '{}': {e}", self.port))?;

        Ok(OtaSettings {
            enabled: self.enabled,
            port,
            password: self.password.clone(),
        })
    }
}
