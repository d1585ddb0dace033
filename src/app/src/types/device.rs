//! Data Transfer Objects for the device REST API
//!
//! The firmware reports settings with `snake_case` keys while the UI model
//! uses `camelCase`. These types handle the translation at the boundary so the
//! form handlers only see the internal types.
//!
//! OTA settings use single-word keys and share one shape on both sides, so
//! they need no separate DTO.

use serde::{Deserialize, Serialize};

use crate::types::{ApSettings, ProvisioningMode};

/// Access point settings as exchanged with `/rest/apSettings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DeviceApSettings {
    pub provision_mode: ProvisioningMode,
    pub ssid: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl From<DeviceApSettings> for ApSettings {
    fn from(device: DeviceApSettings) -> Self {
        Self {
            provisioning_mode: device.provision_mode,
            ssid: device.ssid,
            password: device.password,
            host: device.host,
        }
    }
}

impl From<&ApSettings> for DeviceApSettings {
    fn from(settings: &ApSettings) -> Self {
        Self {
            provision_mode: settings.provisioning_mode,
            ssid: settings.ssid.clone(),
            password: settings.password.clone(),
            host: settings.host.clone(),
        }
    }
}
