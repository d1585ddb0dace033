use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// When the device's wireless access point is reachable
///
/// Serialized as the integer code the firmware uses. Codes outside 0..=2 are
/// rejected during deserialization.
#[derive(
    Debug, Clone, Copy, Default, Serialize_repr, Deserialize_repr, PartialEq, Eq, Hash,
)]
#[repr(u8)]
pub enum ProvisioningMode {
    AlwaysOn = 0,
    #[default]
    OnWhenDisconnected = 1,
    Never = 2,
}

/// Access point settings as edited in the UI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApSettings {
    pub provisioning_mode: ProvisioningMode,
    pub ssid: String,
    pub password: String,
    /// Address the captive portal answers on, when the firmware exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}
