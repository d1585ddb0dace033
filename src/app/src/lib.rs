pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod policy;
pub mod types;
pub mod update;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    events::{ApEvent, Event, OtaEvent, UiEvent},
    http_helpers::{
        build_url, handle_request_error, map_http_error, parse_json_response,
        process_json_response, AP_SETTINGS_ENDPOINT, BASE_URL, OTA_SETTINGS_ENDPOINT,
    },
    model::Model,
    policy::is_access_point_enabled,
    types::*,
    validation::{FieldOutcome, SettingsValidator, ValidationError, Validator, ValidatorRegistry},
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
///
/// Owns the validator registry of the settings forms, assembled once when the
/// app is created.
#[derive(Debug, Default)]
pub struct App {
    validator: SettingsValidator,
}

impl App {
    /// App using a custom set of named validators
    pub fn with_registry(registry: ValidatorRegistry) -> Self {
        Self {
            validator: SettingsValidator::new(registry),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model, &self.validator)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
