//! View model: everything a shell needs to draw the current screen.

use serde::{Deserialize, Serialize};

use crate::guard;
use crate::model::Model;
use crate::types::*;

pub const LOADING_TEXT: &str = "Loading dashboard...";
pub const LOGOUT_LABEL: &str = "Logout";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    /// Current location path
    pub path: String,
    pub page: Page,
    /// Informational notice, e.g. after a successful sign-up
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Page {
    /// The persisted session is still being read
    #[default]
    Starting,
    Login(LoginView),
    AccessDenied(AccessDeniedView),
    Dashboard(DashboardView),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginView {
    pub title: String,
    pub is_sign_up: bool,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub error: Option<String>,
    pub submit_label: String,
    pub toggle_label: String,
    pub is_submitting: bool,
}

impl From<&LoginForm> for LoginView {
    fn from(form: &LoginForm) -> Self {
        let (title, submit_label, toggle_label) = if form.is_sign_up {
            (
                "Sign Up for DietCap",
                "Sign Up",
                "Already have an account? Login",
            )
        } else {
            (
                "Sign In to DietCap",
                "Login",
                "Don't have an account? Sign Up",
            )
        };

        Self {
            title: title.to_string(),
            is_sign_up: form.is_sign_up,
            email: form.email.clone(),
            password: form.password.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            error: form.error.clone(),
            submit_label: submit_label.to_string(),
            toggle_label: toggle_label.to_string(),
            is_submitting: form.is_submitting,
        }
    }
}

/// Fallback rendered by the route guard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessDeniedView {
    pub title: String,
    pub message: String,
    pub link_label: String,
    pub link_path: String,
}

impl Default for AccessDeniedView {
    fn default() -> Self {
        Self {
            title: "Access Denied".to_string(),
            message: "You need to be logged in to access this page.".to_string(),
            link_label: "Go to Login".to_string(),
            link_path: Route::Root.path().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Error { message: String },
    Ready(DashboardContent),
}

/// Dashboard payload flattened for display, absent values are empty
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardContent {
    pub message: String,
    pub recent_activity: Vec<String>,
    pub total_logins: String,
    pub last_login: String,
}

impl From<&DashboardPayload> for DashboardContent {
    fn from(payload: &DashboardPayload) -> Self {
        Self {
            message: payload.message().unwrap_or_default().to_string(),
            recent_activity: payload.recent_activity().to_vec(),
            total_logins: payload
                .total_logins()
                .map(|count| count.to_string())
                .unwrap_or_default(),
            last_login: payload.last_login_date().unwrap_or_default().to_string(),
        }
    }
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        match state {
            DashboardState::Unmounted | DashboardState::Loading { .. } => Self::Loading,
            DashboardState::Failed(message) => Self::Error {
                message: message.clone(),
            },
            DashboardState::Loaded(payload) => Self::Ready(payload.into()),
        }
    }
}

/// Build the view model for the current model
pub fn view(model: &Model) -> ViewModel {
    let page = if !model.session_restored {
        Page::Starting
    } else {
        match model.route {
            Route::Root | Route::Login => Page::Login((&model.login_form).into()),
            Route::Dashboard => guard::guarded(&model.session, || {
                Page::Dashboard((&model.dashboard).into())
            }),
        }
    };

    ViewModel {
        path: model.route.path().to_string(),
        page,
        notice: model.success_message.clone(),
    }
}
