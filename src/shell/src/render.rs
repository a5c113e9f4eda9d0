use dietcap_ui_core::view::{
    AccessDeniedView, DashboardView, LOADING_TEXT, LOGOUT_LABEL, LoginView, Page,
};
use dietcap_ui_core::ViewModel;
use std::fmt::Write;

/// Draw the view model as plain text
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "[{}]", view.path);
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "* {notice}");
    }

    match &view.page {
        Page::Starting => {
            let _ = writeln!(out, "Starting...");
        }
        Page::Login(login) => render_login(&mut out, login),
        Page::AccessDenied(denied) => render_access_denied(&mut out, denied),
        Page::Dashboard(dashboard) => render_dashboard(&mut out, dashboard),
    }

    out
}

fn render_login(out: &mut String, login: &LoginView) {
    let _ = writeln!(out, "{}", login.title);
    if let Some(error) = &login.error {
        let _ = writeln!(out, "! {error}");
    }
    if login.is_sign_up {
        let _ = writeln!(out, "  first name: {}", login.first_name);
        let _ = writeln!(out, "  last name:  {}", login.last_name);
    }
    let _ = writeln!(out, "  email:      {}", login.email);
    let _ = writeln!(out, "  password:   {}", "*".repeat(login.password.chars().count()));

    if login.is_submitting {
        let _ = writeln!(out, "  ({}...)", login.submit_label);
    } else {
        let _ = writeln!(out, "  [submit] {}", login.submit_label);
    }
    let _ = writeln!(out, "  [toggle] {}", login.toggle_label);
}

fn render_access_denied(out: &mut String, denied: &AccessDeniedView) {
    let _ = writeln!(out, "{}", denied.title);
    let _ = writeln!(out, "{}", denied.message);
    let _ = writeln!(out, "  [open {}] {}", denied.link_path, denied.link_label);
}

fn render_dashboard(out: &mut String, dashboard: &DashboardView) {
    match dashboard {
        DashboardView::Loading => {
            let _ = writeln!(out, "{LOADING_TEXT}");
        }
        DashboardView::Error { message } => {
            let _ = writeln!(out, "Error: {message}");
        }
        DashboardView::Ready(content) => {
            let _ = writeln!(out, "{}", content.message);
            let _ = writeln!(out, "Recent activity:");
            for activity in &content.recent_activity {
                let _ = writeln!(out, "  - {activity}");
            }
            let _ = writeln!(out, "Total logins: {}", content.total_logins);
            let _ = writeln!(out, "Last login: {}", content.last_login);
        }
    }
    let _ = writeln!(out, "  [logout] {LOGOUT_LABEL}");
}
