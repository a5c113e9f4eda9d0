use serde::{Deserialize, Serialize};

/// Client-side routes of the application
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Route {
    /// Entry route, renders the login form
    #[default]
    Root,
    Login,
    /// Protected, wrapped in the route guard
    Dashboard,
}

impl Route {
    /// Resolve a location path. Unknown paths redirect to the entry route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            _ => Self::Root,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}
