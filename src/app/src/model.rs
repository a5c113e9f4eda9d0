use crate::types::*;

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    // Routing state
    pub route: Route,

    // Authentication state
    /// Mirror of the persisted `token` and `user` entries
    pub session: Session,
    /// Set once the persisted session was read at startup
    pub session_restored: bool,

    // Login/signup form state
    pub login_form: LoginForm,

    // Dashboard state
    pub dashboard: DashboardState,
    /// Number of dashboard mounts so far, the id of the latest mount
    pub dashboard_mounts: u64,

    // UI state
    pub success_message: Option<String>,
}

impl Model {
    /// Invalidate the current session (logout)
    ///
    /// Equivalent to a full page load of the entry route: all state is reset,
    /// the session is known to be empty.
    pub fn invalidate_session(&mut self) {
        *self = Self {
            session_restored: true,
            // keep ids monotonic so responses issued before the reset are dropped
            dashboard_mounts: self.dashboard_mounts,
            login_form: LoginForm {
                submission: self.login_form.submission,
                ..Default::default()
            },
            ..Default::default()
        };
    }

    /// Apply a transition to the login form
    pub fn reduce_form(&mut self, action: FormAction) {
        self.login_form = reduce(std::mem::take(&mut self.login_form), action);
    }

    /// Set the form error message and stop submitting, returning a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.reduce_form(FormAction::Failed(error));
        crux_core::render::render()
    }
}
