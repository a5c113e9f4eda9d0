use serde::{Deserialize, Serialize};

use crate::commands::storage::StoredSession;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Application start at the given location path
    Initialize { path: String },
    /// Client-side navigation
    Navigate { path: String },

    Auth(AuthEvent),
    // only raised by the core itself
    #[serde(skip)]
    Dashboard(DashboardEvent),
    Ui(UiEvent),
}

/// Login form, session and logout events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    EditField { field: FormField, value: String },
    ToggleMode,
    Submit,
    Logout,

    // Shell and HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    SessionRestored(StoredSession),
    #[serde(skip)]
    LoginResponse {
        submission: u64,
        result: Result<LoginResponse, String>,
    },
    #[serde(skip)]
    SignupResponse {
        submission: u64,
        result: Result<(), String>,
    },
    #[serde(skip)]
    SessionPersisted {
        session: Session,
        result: Result<(), String>,
    },
    #[serde(skip)]
    SessionCleared(Result<(), String>),
}

/// Dashboard view events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    #[serde(skip)]
    Response {
        mount: u64,
        result: Result<DashboardPayload, String>,
    },
}

/// UI message events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}
