//! Session storage command definitions.
//!
//! The Core never touches persisted storage itself. These types define the
//! key-value interface the Shell provides (browser `localStorage`, a file,
//! memory in tests).

use crux_core::{capability::Operation, command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Storage key of the session token
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-serialized user profile
pub const USER_KEY: &str = "user";

// Operations that the Shell needs to perform on its key-value storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Get { key: String },
    Set { key: String, value: String },
    Remove { key: String },
}

// The outcome of a storage operation (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    Value(Option<String>),
    Done,
    Error { message: String },
}

impl Operation for StorageOperation {
    type Output = StorageOutput;
}

impl StorageOutput {
    /// The value read by a `Get`, errors read as absent
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Value(value) => value,
            Self::Done => None,
            Self::Error { message } => {
                log::warn!("storage read failed: {message}");
                None
            }
        }
    }

    /// Map a write outcome to a result
    pub fn into_result(self) -> Result<(), String> {
        match self {
            Self::Error { message } => Err(message),
            Self::Value(_) | Self::Done => Ok(()),
        }
    }
}

/// Raw session values as read from storage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user: Option<String>,
}

/// Command-based storage API
pub struct Storage<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Storage<Effect, Event>
where
    Effect: Send + From<crux_core::Request<StorageOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read token and user
    pub fn load_session(
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = StoredSession>>
    {
        command::RequestBuilder::new(|ctx| async move {
            let token = ctx
                .request_from_shell(StorageOperation::Get {
                    key: TOKEN_KEY.to_string(),
                })
                .await
                .into_value();
            let user = ctx
                .request_from_shell(StorageOperation::Get {
                    key: USER_KEY.to_string(),
                })
                .await
                .into_value();

            StoredSession { token, user }
        })
    }

    /// Write token, then user. Resolves once both writes are done.
    pub fn save_session(
        token: String,
        user: String,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = Result<(), String>>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            ctx.request_from_shell(StorageOperation::Set {
                key: TOKEN_KEY.to_string(),
                value: token,
            })
            .await
            .into_result()?;

            ctx.request_from_shell(StorageOperation::Set {
                key: USER_KEY.to_string(),
                value: user,
            })
            .await
            .into_result()
        })
    }

    /// Remove token and user. Both removals are attempted.
    pub fn clear_session(
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = Result<(), String>>>
    {
        command::RequestBuilder::new(|ctx| async move {
            let token = ctx
                .request_from_shell(StorageOperation::Remove {
                    key: TOKEN_KEY.to_string(),
                })
                .await
                .into_result();
            let user = ctx
                .request_from_shell(StorageOperation::Remove {
                    key: USER_KEY.to_string(),
                })
                .await
                .into_result();

            token.and(user)
        })
    }
}
