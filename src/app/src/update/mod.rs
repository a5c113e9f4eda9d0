mod auth;
mod dashboard;
mod navigation;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Routing
        Event::Initialize { path } => navigation::initialize(&path, model),
        Event::Navigate { path } => navigation::navigate(&path, model),

        // Domains
        Event::Auth(auth_event) => auth::handle(auth_event, model),
        Event::Dashboard(dashboard_event) => dashboard::handle(dashboard_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
