mod access_point;
mod ota;
mod ui;

use crux_core::Command;

use crate::events::{ApEvent, Event, OtaEvent};
use crate::model::Model;
use crate::validation::SettingsValidator;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(
    event: Event,
    model: &mut Model,
    validator: &SettingsValidator,
) -> Command<Effect, Event> {
    match event {
        Event::Initialize => Command::all([
            ota::handle(OtaEvent::Load, model, validator),
            access_point::handle(ApEvent::Load, model, validator),
        ]),
        Event::Ota(ota_event) => ota::handle(ota_event, model, validator),
        Event::AccessPoint(ap_event) => access_point::handle(ap_event, model, validator),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
