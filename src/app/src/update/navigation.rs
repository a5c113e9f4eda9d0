use crux_core::{render::render, Command};
use log::{debug, info};

use crate::events::{AuthEvent, Event};
use crate::guard::{self, Access};
use crate::model::Model;
use crate::types::{DashboardState, Route};
use crate::{Effect, StorageCmd};

use super::dashboard;

/// Start the app at `path`: read the persisted session, then enter the route.
pub fn initialize(path: &str, model: &mut Model) -> Command<Effect, Event> {
    model.route = Route::from_path(path);
    model.session_restored = false;

    Command::all([
        render(),
        StorageCmd::load_session()
            .then_send(|stored| Event::Auth(AuthEvent::SessionRestored(stored))),
    ])
}

/// Client-side navigation to `path`
pub fn navigate(path: &str, model: &mut Model) -> Command<Effect, Event> {
    let route = Route::from_path(path);
    if route.path() != path {
        debug!("redirecting {path} to {}", route.path());
    }

    enter(route, model)
}

/// Make `route` the current route and mount its view.
///
/// Any previously mounted dashboard is unmounted, so its pending fetch is
/// discarded. Protected routes are mounted only behind the route guard.
pub fn enter(route: Route, model: &mut Model) -> Command<Effect, Event> {
    model.route = route;
    model.dashboard = DashboardState::Unmounted;

    if !model.session_restored || !route.is_protected() {
        return render();
    }

    let token = match guard::check(&model.session) {
        Access::Granted { token } => token.to_string(),
        Access::Denied => {
            info!("no token found, user not authenticated");
            return render();
        }
    };

    info!("token found, user authenticated");
    dashboard::mount(token, model)
}
