use crux_core::{render::render, Command};
use crux_http::Response;
use log::{debug, info, warn};
use serde::Serialize;
use serde_valid::Validate;

use crate::events::{AuthEvent, Event};
use crate::http_helpers::{build_url, process_json_response, process_status_response};
use crate::model::Model;
use crate::types::{FormAction, LoginRequest, LoginResponse, Route, Session, SignupRequest};
use crate::{Effect, HttpCmd, StorageCmd};

use super::navigation;

pub const LOGIN_ENDPOINT: &str = "/login";
pub const SIGNUP_ENDPOINT: &str = "/signup";
pub const SIGNUP_SUCCESS: &str = "Account created successfully! Please log in.";

/// Handle authentication-related events
pub fn handle(event: AuthEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AuthEvent::EditField { field, value } => {
            model.reduce_form(FormAction::Edit { field, value });
            render()
        }

        AuthEvent::ToggleMode => {
            model.reduce_form(FormAction::ToggleMode);
            render()
        }

        AuthEvent::Submit => submit(model),

        AuthEvent::Logout => {
            info!("logging out");
            StorageCmd::clear_session()
                .then_send(|result| Event::Auth(AuthEvent::SessionCleared(result)))
        }

        AuthEvent::SessionRestored(stored) => {
            model.session = Session::from_stored(stored.token, stored.user);
            model.session_restored = true;
            navigation::enter(model.route, model)
        }

        AuthEvent::LoginResponse { submission, result } => {
            if submission != model.login_form.submission {
                debug!("dropping superseded login response {submission}");
                return Command::done();
            }

            match result {
                Ok(response) => persist_session(response, model),
                Err(e) => model.set_error_and_render(e),
            }
        }

        AuthEvent::SignupResponse { submission, result } => {
            if submission != model.login_form.submission {
                debug!("dropping superseded sign-up response {submission}");
                return Command::done();
            }

            match result {
                Ok(()) => {
                    info!("account created");
                    model.reduce_form(FormAction::SignedUp);
                    model.success_message = Some(SIGNUP_SUCCESS.to_string());
                    render()
                }
                Err(e) => model.set_error_and_render(e),
            }
        }

        AuthEvent::SessionPersisted { session, result } => match result {
            Ok(()) => {
                info!("session saved");
                model.session = session;
                model.reduce_form(FormAction::LoggedIn);
                navigation::enter(Route::Dashboard, model)
            }
            Err(e) => model.set_error_and_render(format!("Failed to save session: {e}")),
        },

        AuthEvent::SessionCleared(result) => {
            model.invalidate_session();
            if let Err(e) = result {
                warn!("failed to clear session: {e}");
                model.reduce_form(FormAction::Failed(format!("Failed to clear session: {e}")));
            }
            render()
        }
    }
}

fn submit(model: &mut Model) -> Command<Effect, Event> {
    if let Err(error) = model.login_form.validate() {
        debug!("form rejected: {error}");
        model.reduce_form(FormAction::Rejected(error.to_string()));
        return render();
    }

    model.reduce_form(FormAction::Submitted);
    let submission = model.login_form.submission;

    if model.login_form.is_sign_up {
        let request = SignupRequest::from(&model.login_form);
        post_json(SIGNUP_ENDPOINT, "Sign up", &request, model, move |result| {
            Event::Auth(AuthEvent::SignupResponse {
                submission,
                result: process_status_response("Sign up", result),
            })
        })
    } else {
        let request = LoginRequest::from(&model.login_form);
        post_json(LOGIN_ENDPOINT, "Login", &request, model, move |result| {
            Event::Auth(AuthEvent::LoginResponse {
                submission,
                result: process_json_response("Login", result),
            })
        })
    }
}

fn post_json<B, F>(
    endpoint: &str,
    action: &str,
    body: &B,
    model: &mut Model,
    on_response: F,
) -> Command<Effect, Event>
where
    B: Serialize + Validate,
    F: FnOnce(crux_http::Result<Response<Vec<u8>>>) -> Event + Send + 'static,
{
    if let Err(e) = body.validate() {
        return model.set_error_and_render(format!("Failed to create {action} request: {e}"));
    }

    match HttpCmd::post(build_url(endpoint))
        .header("Content-Type", "application/json")
        .body_json(body)
    {
        Ok(builder) => Command::all([render(), builder.build().then_send(on_response)]),
        Err(e) => model.set_error_and_render(format!("Failed to create {action} request: {e}")),
    }
}

fn persist_session(response: LoginResponse, model: &mut Model) -> Command<Effect, Event> {
    let user = match serde_json::to_string(&response.user) {
        Ok(user) => user,
        Err(e) => return model.set_error_and_render(format!("Failed to save session: {e}")),
    };

    let session = Session {
        token: Some(response.access_token.clone()),
        user: Some(response.user),
    };

    StorageCmd::save_session(response.access_token, user).then_send(move |result| {
        Event::Auth(AuthEvent::SessionPersisted { session, result })
    })
}
