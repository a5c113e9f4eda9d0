use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::FormAction;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (clear messages)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ClearError => {
            if model.login_form.error.is_none() {
                return Command::done();
            }
            model.reduce_form(FormAction::ClearError);
            render()
        }
        UiEvent::ClearSuccess => update_field!(model.success_message, None),
    }
}
