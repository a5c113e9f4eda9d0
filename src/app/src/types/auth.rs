use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::form::LoginForm;

/// Request body for `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    #[validate(min_length = 3)]
    pub email: String,
    // length rules live in the form, counted the way the browser counts them
    #[validate(min_length = 1)]
    pub password: String,
}

/// Request body for `POST /signup`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(min_length = 3)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
    #[validate(min_length = 1)]
    pub first_name: String,
    #[validate(min_length = 1)]
    pub last_name: String,
}

impl From<&LoginForm> for LoginRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            email: form.email.clone(),
            password: form.password.clone(),
        }
    }
}

impl From<&LoginForm> for SignupRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            email: form.email.clone(),
            password: form.password.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
        }
    }
}

/// User profile returned on login and persisted under the `user` key
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Successful response of `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: UserProfile,
}

/// The authenticated session as mirrored from persisted storage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// The stored token, `None` when missing or empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    /// Rebuild a session from the raw values read from storage.
    ///
    /// An unreadable user entry is dropped, the token alone decides access.
    pub fn from_stored(token: Option<String>, user: Option<String>) -> Self {
        let user = user.and_then(|json| match serde_json::from_str::<UserProfile>(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("ignoring unreadable stored user: {e}");
                None
            }
        });

        Self {
            token: token.filter(|token| !token.is_empty()),
            user,
        }
    }
}
