use crux_core::{render::render, Command};
use log::{debug, warn};
use serde_valid::Validate;

use crate::events::{Event, OtaEvent};
use crate::handle_response;
use crate::http_helpers::OTA_SETTINGS_ENDPOINT;
use crate::model::Model;
use crate::settings_get;
use crate::settings_post;
use crate::types::{OtaFormData, OtaSettings};
use crate::validation::{OtaField, SettingsValidator};
use crate::Effect;

/// Handle OTA settings form events
pub fn handle(
    event: OtaEvent,
    model: &mut Model,
    validator: &SettingsValidator,
) -> Command<Effect, Event> {
    match event {
        OtaEvent::Load | OtaEvent::Reset => {
            settings_get!(Ota, OtaEvent, model, OTA_SETTINGS_ENDPOINT, LoadResponse, "Load OTA settings",
                expect_json: OtaSettings
            )
        }

        OtaEvent::LoadResponse(result) => handle_response!(model, result, {
            on_success: |model, settings| {
                model.ota.start_editing(OtaFormData::from(&settings));
            },
        }),

        OtaEvent::SetEnabled(enabled) => {
            edit_field(model, validator, OtaField::Enabled, |data| data.enabled = enabled)
        }
        OtaEvent::SetPort(port) => {
            edit_field(model, validator, OtaField::Port, |data| data.port = port)
        }
        OtaEvent::SetPassword(password) => {
            edit_field(model, validator, OtaField::Password, |data| data.password = password)
        }

        OtaEvent::Submit => submit(model, validator),

        OtaEvent::SaveResponse(result) => handle_response!(model, result, {
            on_success: |model, settings| {
                model.ota.start_editing(OtaFormData::from(&settings));
            },
            on_error: |model| {
                model.ota.to_editing();
            },
            success_message: "OTA settings saved",
        }),
    }
}

fn edit_field(
    model: &mut Model,
    validator: &SettingsValidator,
    field: OtaField,
    apply: impl FnOnce(&mut OtaFormData),
) -> Command<Effect, Event> {
    if !model.ota.edit(apply) {
        debug!("ignoring OTA `{}` edit in state {:?}", field.name(), model.ota.state);
        return Command::done();
    }

    let outcome = validator.check_ota_field(field, &model.ota.data);
    model.ota.set_field_error(field.name(), outcome.message);
    render()
}

fn submit(model: &mut Model, validator: &SettingsValidator) -> Command<Effect, Event> {
    if !model.ota.is_editing() {
        debug!("ignoring OTA submit in state {:?}", model.ota.state);
        return Command::done();
    }

    let errors = validator.check_ota(&model.ota.data);
    if !errors.is_empty() {
        warn!("OTA settings not saved: {} invalid field(s)", errors.len());
        model.ota.errors = errors;
        return render();
    }
    model.ota.errors.clear();

    let settings = match model.ota.data.to_settings() {
        Ok(settings) => settings,
        Err(e) => return model.set_error_and_render(e),
    };
    if let Err(e) = settings.validate() {
        warn!("OTA settings out of bounds: {e}");
        return model.set_error_and_render(format!("Invalid OTA settings: {e}"));
    }

    model.ota.to_submitting();
    settings_post!(Ota, OtaEvent, model, OTA_SETTINGS_ENDPOINT, SaveResponse, "Save OTA settings",
        body_json: &settings,
        expect_json: OtaSettings,
        on_request_error: |model| {
            model.ota.to_editing();
        }
    )
}
