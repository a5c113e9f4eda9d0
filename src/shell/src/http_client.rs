use anyhow::{Context, Result};
use crux_http::protocol::{HttpRequest, HttpResponse};
use dietcap_ui_core::BASE_URL;
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::{Client, Method};
use std::time::Duration;
use trait_variant::make;

/// Executes the HTTP requests the core asks for
#[make(Send + Sync)]
#[cfg_attr(feature = "mock", automock)]
pub trait HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Transport against the remote API
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    api_url: String,
}

impl ReqwestTransport {
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("failed to create HTTP client")?,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a core URL against the API base URL
    ///
    /// The core addresses endpoints as `https://relative/<endpoint>`, any
    /// other URL is used unchanged.
    pub fn resolve_url(&self, url: &str) -> String {
        match url.strip_prefix(BASE_URL) {
            Some(endpoint) => format!("{}{endpoint}", self.api_url),
            None => url.to_string(),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = Method::from_bytes(request.method.as_bytes())
            .with_context(|| format!("failed to parse HTTP method {}", request.method))?;
        let url = self.resolve_url(&request.url);

        debug!("{method} {url}");

        let mut builder = self.client.request(method, &url);
        for header in &request.headers {
            builder = builder.header(&header.name, &header.value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("failed to send request to {url}"))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .context("failed to read response body")?;

        debug!("{url} answered HTTP {status}");

        Ok(HttpResponse::status(status).body(body.to_vec()).build())
    }
}

/// Whether a transport error was caused by the configured timeout
pub fn is_timeout(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<reqwest::Error>()
        .is_some_and(reqwest::Error::is_timeout)
}
