use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized (auth_token is excluded)
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    // Settings forms
    pub ota: SettingsForm<OtaFormData>,
    pub access_point: SettingsForm<ApSettings>,
    /// Whether the access point fields are shown, derived from the provisioning mode
    pub access_point_enabled: bool,

    #[serde(skip)]
    pub auth_token: Option<String>,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    /// Requests sent and not answered yet
    #[serde(skip)]
    pub pending_requests: u32,
}

impl Model {
    /// Start a request (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.pending_requests += 1;
        self.is_loading = true;
        self.error_message = None;
    }

    /// Finish a request. Loading stays on while other requests are in flight
    /// and errors of earlier responses are kept.
    pub fn stop_loading(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.is_loading = self.pending_requests > 0;
    }

    /// Set an error message without touching requests still in flight
    pub fn set_error(&mut self, error: String) {
        self.is_loading = self.pending_requests > 0;
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
