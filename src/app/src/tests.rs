use super::*;
use crate::update::update;
use crate::view::{DashboardView, Page};
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use crux_http::HttpError;

type Cmd = Command<Effect, Event>;

fn take_http(cmd: &mut Cmd) -> Request<HttpRequest> {
    cmd.effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("expected an HTTP effect")
}

fn take_storage(cmd: &mut Cmd) -> Request<StorageOperation> {
    cmd.effects()
        .find_map(|effect| match effect {
            Effect::Storage(request) => Some(request),
            _ => None,
        })
        .expect("expected a storage effect")
}

fn has_http(cmd: &mut Cmd) -> bool {
    cmd.effects().any(|effect| matches!(effect, Effect::Http(_)))
}

fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| header.value.as_str())
}

fn edit(model: &mut Model, field: FormField, value: &str) {
    let _ = update(
        Event::Auth(AuthEvent::EditField {
            field,
            value: value.to_string(),
        }),
        model,
    );
}

fn restored_model(token: Option<&str>) -> Model {
    Model {
        session: Session {
            token: token.map(str::to_string),
            user: None,
        },
        session_restored: true,
        ..Default::default()
    }
}

fn login_model(email: &str, password: &str) -> Model {
    let mut model = restored_model(None);
    edit(&mut model, FormField::Email, email);
    edit(&mut model, FormField::Password, password);
    model
}

#[test]
fn test_short_password_blocks_submission() {
    let mut model = login_model("a@b.com", "12345");

    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);

    assert!(!has_http(&mut cmd));
    assert_eq!(
        model.login_form.error.as_deref(),
        Some("Password must be at least 6 characters.")
    );
    assert!(!model.login_form.is_submitting);
}

#[test]
fn test_signup_without_first_name_blocks_submission() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::ToggleMode), &mut model);
    edit(&mut model, FormField::LastName, "Lovelace");

    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);

    assert!(!has_http(&mut cmd));
    assert_eq!(
        model.login_form.error.as_deref(),
        Some("First name is required.")
    );
}

#[test]
fn test_email_without_at_blocks_submission() {
    let mut model = login_model("ab.com", "123456");

    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);

    assert!(!has_http(&mut cmd));
    assert_eq!(
        model.login_form.error.as_deref(),
        Some("Invalid email format.")
    );
}

#[test]
fn test_valid_login_posts_credentials() {
    let mut model = login_model("a@b.com", "123456");

    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);
    let request = take_http(&mut cmd);

    assert_eq!(request.operation.method, "POST");
    assert_eq!(request.operation.url, "https://relative/login");
    assert_eq!(
        header(&request.operation, "Content-Type"),
        Some("application/json")
    );
    let body: serde_json::Value =
        serde_json::from_slice(&request.operation.body).expect("body should be JSON");
    assert_eq!(
        body,
        serde_json::json!({"email": "a@b.com", "password": "123456"})
    );
    assert!(model.login_form.is_submitting);
    assert_eq!(model.login_form.error, None);
}

#[test]
fn test_valid_signup_posts_names() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::ToggleMode), &mut model);
    edit(&mut model, FormField::FirstName, "Ada");
    edit(&mut model, FormField::LastName, "Lovelace");

    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);
    let request = take_http(&mut cmd);

    assert_eq!(request.operation.url, "https://relative/signup");
    let body: serde_json::Value =
        serde_json::from_slice(&request.operation.body).expect("body should be JSON");
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
}

#[test]
fn test_login_error_detail_becomes_form_error() {
    let mut model = login_model("a@b.com", "123456");
    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Ok(
            HttpResponse::status(400)
                .body(r#"{"detail": "Invalid email or password"}"#)
                .build(),
        ))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    assert_eq!(
        model.login_form.error.as_deref(),
        Some("Invalid email or password")
    );
    assert!(!model.login_form.is_submitting);
}

#[test]
fn test_login_error_without_detail_is_generic() {
    let mut model = login_model("a@b.com", "123456");
    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Ok(HttpResponse::status(500).body("oops").build()))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    assert_eq!(model.login_form.error.as_deref(), Some("Something went wrong"));
}

#[test]
fn test_login_persists_token_and_user_before_navigating() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::Submit), &mut model);

    let response = LoginResponse {
        access_token: "token-1".to_string(),
        user: UserProfile {
            email: Some("a@b.com".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        },
    };
    let mut cmd = update(
        Event::Auth(AuthEvent::LoginResponse {
            submission: 1,
            result: Ok(response),
        }),
        &mut model,
    );

    // nothing navigates while the writes are pending
    assert_eq!(model.route, Route::Root);
    assert_eq!(model.session.token(), None);

    let mut write_token = take_storage(&mut cmd);
    assert_eq!(
        write_token.operation,
        StorageOperation::Set {
            key: "token".to_string(),
            value: "token-1".to_string(),
        }
    );
    write_token
        .resolve(StorageOutput::Done)
        .expect("should resolve");

    let mut write_user = take_storage(&mut cmd);
    let StorageOperation::Set { key, value } = &write_user.operation else {
        panic!("expected a write, got {:?}", write_user.operation);
    };
    assert_eq!(key, "user");
    let stored: UserProfile = serde_json::from_str(value).expect("user should be JSON");
    assert_eq!(stored.first_name.as_deref(), Some("Ada"));
    write_user
        .resolve(StorageOutput::Done)
        .expect("should resolve");

    let persisted = cmd.events().next().expect("expected a persisted event");
    let mut cmd = update(persisted, &mut model);

    assert_eq!(model.route, Route::Dashboard);
    assert_eq!(model.session.token(), Some("token-1"));
    assert_eq!(model.login_form.email, "");
    let request = take_http(&mut cmd);
    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/dashboard");
    assert_eq!(
        header(&request.operation, "Authorization"),
        Some("Bearer token-1")
    );
}

#[test]
fn test_failed_session_write_stays_on_form() {
    let mut model = login_model("a@b.com", "123456");

    let _ = update(
        Event::Auth(AuthEvent::SessionPersisted {
            session: Session {
                token: Some("t".to_string()),
                user: None,
            },
            result: Err("disk full".to_string()),
        }),
        &mut model,
    );

    assert_eq!(model.route, Route::Root);
    assert_eq!(model.session.token(), None);
    assert_eq!(
        model.login_form.error.as_deref(),
        Some("Failed to save session: disk full")
    );
}

#[test]
fn test_superseded_login_response_is_dropped() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::Submit), &mut model);
    let _ = update(Event::Auth(AuthEvent::Submit), &mut model);
    assert_eq!(model.login_form.submission, 2);

    let mut cmd = update(
        Event::Auth(AuthEvent::LoginResponse {
            submission: 1,
            result: Err("Invalid email or password".to_string()),
        }),
        &mut model,
    );

    assert!(cmd.is_done());
    assert_eq!(model.login_form.error, None);
    assert!(model.login_form.is_submitting);
}

#[test]
fn test_signup_success_switches_to_login() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::ToggleMode), &mut model);
    edit(&mut model, FormField::FirstName, "Ada");
    edit(&mut model, FormField::LastName, "Lovelace");
    let _ = update(Event::Auth(AuthEvent::Submit), &mut model);

    let mut cmd = update(
        Event::Auth(AuthEvent::SignupResponse {
            submission: 1,
            result: Ok(()),
        }),
        &mut model,
    );

    assert!(!has_http(&mut cmd));
    assert!(!model.login_form.is_sign_up);
    assert_eq!(
        model.success_message.as_deref(),
        Some("Account created successfully! Please log in.")
    );
    assert_eq!(model.session.token(), None);
    assert_eq!(model.route, Route::Root);
}

#[test]
fn test_signup_error_detail_stays_on_signup_form() {
    let mut model = login_model("a@b.com", "123456");
    let _ = update(Event::Auth(AuthEvent::ToggleMode), &mut model);
    edit(&mut model, FormField::FirstName, "Ada");
    edit(&mut model, FormField::LastName, "Lovelace");
    let mut cmd = update(Event::Auth(AuthEvent::Submit), &mut model);
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Ok(
            HttpResponse::status(400)
                .body(r#"{"detail": "Email already registered"}"#)
                .build(),
        ))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    assert!(model.login_form.is_sign_up);
    assert!(!model.login_form.is_submitting);
    assert_eq!(
        model.login_form.error.as_deref(),
        Some("Email already registered")
    );
    assert_eq!(model.success_message, None);
}

#[test]
fn test_initialize_restores_session_then_mounts_dashboard() {
    let mut model = Model::default();

    let mut cmd = update(
        Event::Initialize {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );
    assert_eq!(view::view(&model).page, Page::Starting);

    let mut read_token = take_storage(&mut cmd);
    assert_eq!(
        read_token.operation,
        StorageOperation::Get {
            key: "token".to_string()
        }
    );
    read_token
        .resolve(StorageOutput::Value(Some("stored".to_string())))
        .expect("should resolve");
    let mut read_user = take_storage(&mut cmd);
    read_user
        .resolve(StorageOutput::Value(None))
        .expect("should resolve");

    let restored = cmd.events().next().expect("expected a restored event");
    let mut cmd = update(restored, &mut model);

    assert!(model.session_restored);
    assert_eq!(model.dashboard, DashboardState::Loading { mount: 1 });
    let request = take_http(&mut cmd);
    assert_eq!(
        header(&request.operation, "Authorization"),
        Some("Bearer stored")
    );
}

#[test]
fn test_dashboard_without_token_renders_fallback_and_does_not_fetch() {
    let mut model = restored_model(None);

    let mut cmd = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );

    assert!(!has_http(&mut cmd));
    assert_eq!(model.dashboard, DashboardState::Unmounted);
    assert!(matches!(view::view(&model).page, Page::AccessDenied(_)));
}

#[test]
fn test_unknown_path_redirects_to_entry_route() {
    let mut model = restored_model(Some("t"));

    let mut cmd = update(
        Event::Navigate {
            path: "/nowhere".to_string(),
        },
        &mut model,
    );

    assert!(!has_http(&mut cmd));
    assert_eq!(model.route, Route::Root);
    assert_eq!(view::view(&model).path, "/");
}

#[test]
fn test_dashboard_non_success_status_is_generic_error() {
    let mut model = restored_model(Some("t"));
    let mut cmd = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Ok(
            HttpResponse::status(401)
                .body(r#"{"detail": "Invalid token"}"#)
                .build(),
        ))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    assert_eq!(
        view::view(&model).page,
        Page::Dashboard(DashboardView::Error {
            message: "Failed to fetch dashboard data".to_string()
        })
    );
}

#[test]
fn test_dashboard_transport_failure_is_shown() {
    let mut model = restored_model(Some("t"));
    let mut cmd = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Err(HttpError::Io(
            "connection refused".to_string(),
        )))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    let Page::Dashboard(DashboardView::Error { message }) = view::view(&model).page else {
        panic!("expected the dashboard error");
    };
    assert!(message.contains("connection refused"));
    assert!(!model.dashboard.is_loading(1));
}

#[test]
fn test_dashboard_success_renders_payload() {
    let mut model = restored_model(Some("t"));
    let mut cmd = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );
    let mut request = take_http(&mut cmd);

    request
        .resolve(HttpResult::Ok(
            HttpResponse::ok()
                .body(
                    r#"{"message": "Welcome to your dashboard, Ada!",
                        "dashboard_data": {"recent_activity": ["Login successful"],
                        "stats": {"total_logins": 3, "last_login": "2024-05-01T10:00:00+00:00"}}}"#,
                )
                .build(),
        ))
        .expect("should resolve");
    let event = cmd.events().next().expect("expected a response event");
    let _ = update(event, &mut model);

    let Page::Dashboard(DashboardView::Ready(content)) = view::view(&model).page else {
        panic!("expected a loaded dashboard");
    };
    assert_eq!(content.message, "Welcome to your dashboard, Ada!");
    assert_eq!(content.recent_activity, vec!["Login successful".to_string()]);
    assert_eq!(content.total_logins, "3");
    assert_eq!(content.last_login, "2024-05-01");
}

#[test]
fn test_dashboard_resolves_once_per_mount() {
    let mut model = restored_model(Some("t"));
    let _ = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );

    let _ = update(
        Event::Dashboard(DashboardEvent::Response {
            mount: 1,
            result: Err("Failed to fetch dashboard data".to_string()),
        }),
        &mut model,
    );
    let mut cmd = update(
        Event::Dashboard(DashboardEvent::Response {
            mount: 1,
            result: Ok(DashboardPayload::default()),
        }),
        &mut model,
    );

    assert!(cmd.is_done());
    assert_eq!(
        model.dashboard,
        DashboardState::Failed("Failed to fetch dashboard data".to_string())
    );
}

#[test]
fn test_remount_drops_response_of_previous_mount() {
    let mut model = restored_model(Some("t"));
    let navigate = || Event::Navigate {
        path: "/dashboard".to_string(),
    };
    let _ = update(navigate(), &mut model);
    let _ = update(navigate(), &mut model);
    assert_eq!(model.dashboard, DashboardState::Loading { mount: 2 });

    let _ = update(
        Event::Dashboard(DashboardEvent::Response {
            mount: 1,
            result: Ok(DashboardPayload::default()),
        }),
        &mut model,
    );

    assert_eq!(model.dashboard, DashboardState::Loading { mount: 2 });
}

#[test]
fn test_logout_clears_both_keys_and_returns_to_entry_route() {
    let mut model = restored_model(Some("t"));
    let _ = update(
        Event::Navigate {
            path: "/dashboard".to_string(),
        },
        &mut model,
    );

    let mut cmd = update(Event::Auth(AuthEvent::Logout), &mut model);

    let mut remove_token = take_storage(&mut cmd);
    assert_eq!(
        remove_token.operation,
        StorageOperation::Remove {
            key: "token".to_string()
        }
    );
    remove_token
        .resolve(StorageOutput::Done)
        .expect("should resolve");
    let mut remove_user = take_storage(&mut cmd);
    assert_eq!(
        remove_user.operation,
        StorageOperation::Remove {
            key: "user".to_string()
        }
    );
    remove_user
        .resolve(StorageOutput::Done)
        .expect("should resolve");

    let cleared = cmd.events().next().expect("expected a cleared event");
    let _ = update(cleared, &mut model);

    assert_eq!(model.route, Route::Root);
    assert_eq!(model.session, Session::default());
    assert_eq!(model.dashboard, DashboardState::Unmounted);
    assert!(matches!(view::view(&model).page, Page::Login(_)));
}

#[test]
fn test_clear_error() {
    let mut model = restored_model(None);
    model.login_form.error = Some("Email is required.".to_string());

    let _ = update(Event::Ui(UiEvent::ClearError), &mut model);

    assert_eq!(model.login_form.error, None);
}

#[test]
fn test_clear_error_without_change_does_not_render() {
    let mut model = restored_model(None);

    let mut cmd = update(Event::Ui(UiEvent::ClearError), &mut model);

    assert!(cmd.is_done());
}
