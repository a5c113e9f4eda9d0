pub mod commands;
pub mod events;
pub mod guard;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::storage::{StorageOperation, StorageOutput, StoredSession, TOKEN_KEY, USER_KEY},
    events::{AuthEvent, DashboardEvent, Event, UiEvent},
    http_helpers::{build_url, BASE_URL},
    model::Model,
    types::*,
    view::ViewModel,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Storage(StorageOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type StorageCmd = crate::commands::storage::Storage<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        view::view(model)
    }
}
