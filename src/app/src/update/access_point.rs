use crux_core::{render::render, Command};
use log::{debug, warn};

use crate::events::{ApEvent, Event};
use crate::handle_response;
use crate::http_helpers::AP_SETTINGS_ENDPOINT;
use crate::model::Model;
use crate::policy::is_access_point_enabled;
use crate::settings_get;
use crate::settings_post;
use crate::types::{ApSettings, DeviceApSettings};
use crate::validation::{ApField, SettingsValidator};
use crate::Effect;

/// Handle access point settings form events
pub fn handle(
    event: ApEvent,
    model: &mut Model,
    validator: &SettingsValidator,
) -> Command<Effect, Event> {
    match event {
        ApEvent::Load | ApEvent::Reset => {
            settings_get!(AccessPoint, ApEvent, model, AP_SETTINGS_ENDPOINT, LoadResponse, "Load access point settings",
                expect_json: DeviceApSettings,
                map: ApSettings::from
            )
        }

        ApEvent::LoadResponse(result) => handle_response!(model, result, {
            on_success: |model, settings| {
                model.access_point_enabled = is_access_point_enabled(&settings);
                model.access_point.start_editing(settings);
            },
        }),

        ApEvent::SetProvisioningMode(mode) => {
            if !model.access_point.edit(|data| data.provisioning_mode = mode) {
                debug!(
                    "ignoring provisioning mode edit in state {:?}",
                    model.access_point.state
                );
                return Command::done();
            }

            model.access_point_enabled = is_access_point_enabled(&model.access_point.data);
            if !model.access_point_enabled {
                for field in ApField::ALL {
                    model.access_point.set_field_error(field.name(), None);
                }
            }
            render()
        }
        ApEvent::SetSsid(ssid) => {
            edit_field(model, validator, ApField::Ssid, |data| data.ssid = ssid)
        }
        ApEvent::SetPassword(password) => {
            edit_field(model, validator, ApField::Password, |data| data.password = password)
        }
        ApEvent::SetHost(host) => {
            edit_field(model, validator, ApField::Host, |data| data.host = Some(host))
        }

        ApEvent::Submit => submit(model, validator),

        ApEvent::SaveResponse(result) => handle_response!(model, result, {
            on_success: |model, settings| {
                model.access_point_enabled = is_access_point_enabled(&settings);
                model.access_point.start_editing(settings);
            },
            on_error: |model| {
                model.access_point.to_editing();
            },
            success_message: "Access point settings saved",
        }),
    }
}

fn edit_field(
    model: &mut Model,
    validator: &SettingsValidator,
    field: ApField,
    apply: impl FnOnce(&mut ApSettings),
) -> Command<Effect, Event> {
    if !model.access_point.edit(apply) {
        debug!(
            "ignoring access point `{}` edit in state {:?}",
            field.name(),
            model.access_point.state
        );
        return Command::done();
    }

    let outcome = validator.check_ap_field(field, &model.access_point.data);
    model.access_point.set_field_error(field.name(), outcome.message);
    render()
}

fn submit(model: &mut Model, validator: &SettingsValidator) -> Command<Effect, Event> {
    if !model.access_point.is_editing() {
        debug!(
            "ignoring access point submit in state {:?}",
            model.access_point.state
        );
        return Command::done();
    }

    let errors = validator.check_access_point(&model.access_point.data);
    if !errors.is_empty() {
        warn!(
            "access point settings not saved: {} invalid field(s)",
            errors.len()
        );
        model.access_point.errors = errors;
        return render();
    }
    model.access_point.errors.clear();

    let request = DeviceApSettings::from(&model.access_point.data);
    model.access_point.to_submitting();
    settings_post!(AccessPoint, ApEvent, model, AP_SETTINGS_ENDPOINT, SaveResponse, "Save access point settings",
        body_json: &request,
        expect_json: DeviceApSettings,
        map: ApSettings::from,
        on_request_error: |model| {
            model.access_point.to_editing();
        }
    )
}
