use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::OnceLock, time::Duration};

/// Shell configuration loaded at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Remote API configuration
    pub api: ApiConfig,

    /// Where the session (`token` and `user`) is persisted
    pub session: SessionConfig,

    /// Location path the application starts at
    pub start_path: String,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub url: String,
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// `None` keeps the session in memory only
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Get or load the shell configuration
    ///
    /// On first call, it loads and validates all configuration from
    /// environment variables. Subsequent calls return the cached instance.
    pub fn get() -> Result<&'static Self> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }

        let config = Self::load()?;
        Ok(APP_CONFIG.get_or_init(|| config))
    }

    fn load() -> Result<Self> {
        let api = ApiConfig::load()?;
        let session = SessionConfig::load();
        let start_path = env::var("DIETCAP_START_PATH").unwrap_or_else(|_| "/".to_string());

        Ok(Self {
            api,
            session,
            start_path,
        })
    }
}

impl ApiConfig {
    fn load() -> Result<Self> {
        let url = parse_api_url(
            &env::var("DIETCAP_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
        )?;
        let timeout = parse_timeout(env::var("DIETCAP_HTTP_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self { url, timeout })
    }
}

impl SessionConfig {
    fn load() -> Self {
        let file = env::var("DIETCAP_SESSION_FILE")
            .unwrap_or_else(|_| "dietcap-session.json".to_string());

        Self {
            file: (!file.trim().is_empty()).then(|| PathBuf::from(file)),
        }
    }
}

/// Normalize the API base URL, without trailing slash
fn parse_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    anyhow::ensure!(
        url.starts_with("http://") || url.starts_with("https://"),
        "failed to parse DIETCAP_API_URL: expected an http(s) URL, got \"{url}\""
    );

    Ok(url.to_string())
}

fn parse_timeout(value: Option<&str>) -> Result<Option<Duration>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let secs = value
        .parse::<u64>()
        .context("failed to parse DIETCAP_HTTP_TIMEOUT_SECS: invalid format")?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_drops_trailing_slash() {
        assert_eq!(
            parse_api_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn api_url_requires_http_scheme() {
        assert!(parse_api_url("localhost:8000").is_err());
    }

    #[test]
    fn timeout_is_optional() {
        assert_eq!(parse_timeout(None).unwrap(), None);
        assert_eq!(parse_timeout(Some("")).unwrap(), None);
        assert_eq!(parse_timeout(Some("0")).unwrap(), None);
        assert_eq!(
            parse_timeout(Some("30")).unwrap(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn timeout_rejects_garbage() {
        let err = parse_timeout(Some("soon")).unwrap_err();
        assert!(err.to_string().contains("DIETCAP_HTTP_TIMEOUT_SECS"));
    }
}
