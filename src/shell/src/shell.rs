use crate::{
    http_client::{HttpTransport, is_timeout},
    session_storage::SessionStorage,
};
use anyhow::{Result, anyhow};
use crux_core::Core;
use crux_http::{
    HttpError,
    protocol::{HttpRequest, HttpResult},
};
use dietcap_ui_core::{App, Effect, Event, StorageOperation, StorageOutput, ViewModel};
use log::{debug, warn};
use std::collections::VecDeque;

/// Runs the core and answers its effects
pub struct Shell<S, T> {
    core: Core<App>,
    storage: S,
    transport: T,
    renders: usize,
}

impl<S, T> Shell<S, T>
where
    S: SessionStorage,
    T: HttpTransport,
{
    pub fn new(storage: S, transport: T) -> Self {
        Self {
            core: Core::new(),
            storage,
            transport,
            renders: 0,
        }
    }

    /// Dispatch an event and answer every effect it leads to
    ///
    /// Returns once the core has no outstanding effects left.
    pub async fn dispatch(&mut self, event: Event) -> Result<()> {
        debug!("dispatch {event:?}");
        let effects = self.core.process_event(event);
        self.process_effects(effects).await
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }

    /// Number of render requests received so far
    pub fn renders(&self) -> usize {
        self.renders
    }

    async fn process_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        let mut queue = VecDeque::from(effects);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Render(_) => self.renders += 1,
                Effect::Http(mut request) => {
                    let result = self.execute_http(request.operation.clone()).await;
                    let effects = self
                        .core
                        .resolve(&mut request, result)
                        .map_err(|e| anyhow!("failed to resolve http request: {e:?}"))?;
                    queue.extend(effects);
                }
                Effect::Storage(mut request) => {
                    let output = self.execute_storage(request.operation.clone()).await;
                    let effects = self
                        .core
                        .resolve(&mut request, output)
                        .map_err(|e| anyhow!("failed to resolve storage request: {e:?}"))?;
                    queue.extend(effects);
                }
            }
        }

        Ok(())
    }

    async fn execute_http(&self, request: HttpRequest) -> HttpResult {
        match self.transport.execute(request).await {
            Ok(response) => HttpResult::Ok(response),
            Err(e) if is_timeout(&e) => {
                warn!("http request timed out: {e:#}");
                HttpResult::Err(HttpError::Timeout)
            }
            Err(e) => {
                warn!("http request failed: {e:#}");
                HttpResult::Err(HttpError::Io(format!("{e:#}")))
            }
        }
    }

    async fn execute_storage(&self, operation: StorageOperation) -> StorageOutput {
        let result = match operation {
            StorageOperation::Get { key } => self.storage.get(&key).await.map(StorageOutput::Value),
            StorageOperation::Set { key, value } => self
                .storage
                .set(&key, &value)
                .await
                .map(|()| StorageOutput::Done),
            StorageOperation::Remove { key } => self
                .storage
                .remove(&key)
                .await
                .map(|()| StorageOutput::Done),
        };

        result.unwrap_or_else(|e| {
            warn!("session storage failed: {e:#}");
            StorageOutput::Error {
                message: format!("{e:#}"),
            }
        })
    }
}
