use serde::{Deserialize, Serialize};

/// Message shown when `GET /dashboard` answers with a non-2xx status
pub const DASHBOARD_FETCH_FAILED: &str = "Failed to fetch dashboard data";

/// Response of `GET /dashboard`
///
/// The shape is defined by the server, every level is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardPayload {
    pub message: Option<String>,
    pub dashboard_data: Option<DashboardData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardData {
    pub recent_activity: Option<Vec<String>>,
    pub stats: Option<DashboardStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardStats {
    pub total_logins: Option<u64>,
    pub last_login: Option<String>,
}

impl DashboardPayload {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn recent_activity(&self) -> &[String] {
        self.dashboard_data
            .as_ref()
            .and_then(|data| data.recent_activity.as_deref())
            .unwrap_or_default()
    }

    pub fn total_logins(&self) -> Option<u64> {
        self.stats().and_then(|stats| stats.total_logins)
    }

    /// Calendar date part of the ISO-8601 `last_login` timestamp
    pub fn last_login_date(&self) -> Option<&str> {
        self.stats()
            .and_then(|stats| stats.last_login.as_deref())
            .and_then(|timestamp| timestamp.split('T').next())
            .filter(|date| !date.is_empty())
    }

    fn stats(&self) -> Option<&DashboardStats> {
        self.dashboard_data
            .as_ref()
            .and_then(|data| data.stats.as_ref())
    }
}

/// Lifecycle of the dashboard view
///
/// Every mount gets a new id. A response is applied only while the view is
/// still loading for that same mount, so it resolves at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DashboardState {
    #[default]
    Unmounted,
    Loading {
        mount: u64,
    },
    Loaded(DashboardPayload),
    Failed(String),
}

impl DashboardState {
    pub fn is_loading(&self, mount: u64) -> bool {
        matches!(self, Self::Loading { mount: current } if *current == mount)
    }

    /// Resolve the fetch of `mount`, responses of other mounts are dropped
    pub fn resolve(self, mount: u64, result: Result<DashboardPayload, String>) -> Self {
        if !self.is_loading(mount) {
            return self;
        }

        match result {
            Ok(payload) => Self::Loaded(payload),
            Err(error) => Self::Failed(error),
        }
    }
}
