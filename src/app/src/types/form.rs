use serde::{Deserialize, Serialize};

/// Minimum password length in UTF-16 code units, as a browser counts it
pub const MIN_PASSWORD_LEN: usize = 6;

pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Input fields of the login/signup form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    FirstName,
    LastName,
}

/// State of the login/signup form
///
/// `submission` counts the requests issued from this form. Only the response
/// to the latest submission is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_sign_up: bool,
    pub error: Option<String>,
    pub is_submitting: bool,
    pub submission: u64,
}

/// Transitions of the login/signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit { field: FormField, value: String },
    ToggleMode,
    Rejected(String),
    Submitted,
    Failed(String),
    SignedUp,
    LoggedIn,
    ClearError,
}

/// Apply `action` to the form and return the resulting state.
pub fn reduce(state: LoginForm, action: FormAction) -> LoginForm {
    match action {
        FormAction::Edit { field, value } => {
            let mut state = state;
            match field {
                FormField::Email => state.email = value,
                FormField::Password => state.password = value,
                FormField::FirstName => state.first_name = value,
                FormField::LastName => state.last_name = value,
            }
            state
        }
        FormAction::ToggleMode => LoginForm {
            is_sign_up: !state.is_sign_up,
            error: None,
            ..state
        },
        FormAction::Rejected(error) => LoginForm {
            error: Some(error),
            ..state
        },
        FormAction::Submitted => LoginForm {
            error: None,
            is_submitting: true,
            submission: state.submission + 1,
            ..state
        },
        FormAction::Failed(error) => LoginForm {
            error: Some(error),
            is_submitting: false,
            ..state
        },
        // credentials stay filled in so the user can log in right away
        FormAction::SignedUp => LoginForm {
            is_sign_up: false,
            error: None,
            is_submitting: false,
            ..state
        },
        // the form is left behind, a later visit starts empty
        FormAction::LoggedIn => LoginForm {
            submission: state.submission,
            ..LoginForm::default()
        },
        FormAction::ClearError => LoginForm {
            error: None,
            ..state
        },
    }
}

impl LoginForm {
    /// Validate the form. The first failing rule wins.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_sign_up {
            if self.first_name.trim().is_empty() {
                return Err(FIRST_NAME_REQUIRED);
            }
            if self.last_name.trim().is_empty() {
                return Err(LAST_NAME_REQUIRED);
            }
        }
        if self.email.trim().is_empty() {
            return Err(EMAIL_REQUIRED);
        }
        if !is_valid_email(&self.email) {
            return Err(EMAIL_INVALID);
        }
        if self.password.trim().is_empty()
            || self.password.encode_utf16().count() < MIN_PASSWORD_LEN
        {
            return Err(PASSWORD_TOO_SHORT);
        }
        Ok(())
    }
}

/// Check for a `local@domain.tld` shaped address.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: exactly one `@`, no whitespace,
/// and a dot in the domain with at least one character on either side.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let is_valid_part =
        |part: &str| !part.is_empty() && !part.contains('@') && !part.contains(char::is_whitespace);

    is_valid_part(local)
        && is_valid_part(domain)
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
