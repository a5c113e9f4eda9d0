use crux_core::{render::render, Command};
use crux_http::{HttpError, Response};
use log::{debug, error, warn};

use crate::events::{DashboardEvent, Event};
use crate::http_helpers::{build_url, map_http_error, parse_json_body};
use crate::model::Model;
use crate::types::{DashboardPayload, DashboardState, DASHBOARD_FETCH_FAILED};
use crate::{Effect, HttpCmd};

pub const DASHBOARD_ENDPOINT: &str = "/dashboard";

/// Mount the dashboard: enter the loading state and fetch with `token`.
pub fn mount(token: String, model: &mut Model) -> Command<Effect, Event> {
    model.dashboard_mounts += 1;
    let mount = model.dashboard_mounts;
    model.dashboard = DashboardState::Loading { mount };

    Command::all([
        render(),
        HttpCmd::get(build_url(DASHBOARD_ENDPOINT))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .build()
            .then_send(move |result| {
                Event::Dashboard(DashboardEvent::Response {
                    mount,
                    result: process_dashboard_response(result),
                })
            }),
    ])
}

/// Handle dashboard events
pub fn handle(event: DashboardEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DashboardEvent::Response { mount, result } => {
            if !model.dashboard.is_loading(mount) {
                debug!("dropping dashboard response of unmounted view {mount}");
                return Command::done();
            }

            match &result {
                Ok(payload) => debug!("dashboard data: {payload:?}"),
                Err(e) => error!("dashboard error: {e}"),
            }

            model.dashboard = std::mem::take(&mut model.dashboard).resolve(mount, result);
            render()
        }
    }
}

// Any non-2xx status is reported with the same generic message
fn process_dashboard_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<DashboardPayload, String> {
    match result {
        Ok(mut response) => parse_json_body("Dashboard", response.take_body()),
        Err(e @ HttpError::Http { .. }) => {
            warn!("dashboard request rejected: {e}");
            Err(DASHBOARD_FETCH_FAILED.to_string())
        }
        Err(e) => Err(map_http_error("Dashboard", e)),
    }
}
