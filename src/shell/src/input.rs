//! Terminal commands, one per input line.

use dietcap_ui_core::{AuthEvent, Event, FormField, UiEvent};

pub const HELP: &str = "\
commands:
  email <value>        set the email field
  password <value>     set the password field
  first-name <value>   set the first name field (sign-up)
  last-name <value>    set the last name field (sign-up)
  toggle               switch between login and sign-up
  submit               submit the form
  open <path>          navigate to a path, e.g. /dashboard
  logout               clear the session
  dismiss              clear the error and the notice
  help                 show this help
  quit                 exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Events to dispatch to the core, in order
    Dispatch(Vec<Event>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name {
        "email" => edit(FormField::Email, arg),
        "password" => edit(FormField::Password, arg),
        "first-name" => edit(FormField::FirstName, arg),
        "last-name" => edit(FormField::LastName, arg),
        "toggle" => auth(AuthEvent::ToggleMode),
        "submit" => auth(AuthEvent::Submit),
        "logout" => auth(AuthEvent::Logout),
        "open" => {
            if arg.is_empty() {
                return Err("usage: open <path>".to_string());
            }
            Command::Dispatch(vec![Event::Navigate {
                path: arg.to_string(),
            }])
        }
        "dismiss" => Command::Dispatch(vec![
            Event::Ui(UiEvent::ClearError),
            Event::Ui(UiEvent::ClearSuccess),
        ]),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command \"{other}\", type help")),
    };

    Ok(Some(command))
}

fn edit(field: FormField, value: &str) -> Command {
    auth(AuthEvent::EditField {
        field,
        value: value.to_string(),
    })
}

fn auth(event: AuthEvent) -> Command {
    Command::Dispatch(vec![Event::Auth(event)])
}
