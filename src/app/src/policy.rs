use crate::types::{ApSettings, ProvisioningMode};

/// Whether the device's access point is reachable under the given settings.
///
/// The access point fields of the form are only shown, and only validated,
/// while this is `true`.
pub fn is_access_point_enabled(settings: &ApSettings) -> bool {
    match settings.provisioning_mode {
        ProvisioningMode::AlwaysOn | ProvisioningMode::OnWhenDisconnected => true,
        ProvisioningMode::Never => false,
    }
}
