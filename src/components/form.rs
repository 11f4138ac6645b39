use yew::prelude::*;

use crate::api::is_unauthorized;
use crate::session::redirect_to_login;

pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: Option<String>,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    match &props.message {
        Some(msg) => html! { <div class="alert alert-danger" role="alert">{ msg.clone() }</div> },
        None => html! {},
    }
}

#[derive(Debug, PartialEq)]
enum ErrorOutcome {
    SignIn,
    Show(String),
}

fn error_outcome(err: &anyhow::Error) -> ErrorOutcome {
    if is_unauthorized(err) {
        ErrorOutcome::SignIn
    } else {
        ErrorOutcome::Show(err.to_string())
    }
}

/// Shows `err` in `target`, or sends the user to login when the session is gone.
pub fn report_error(err: &anyhow::Error, target: &UseStateHandle<Option<String>>) {
    match error_outcome(err) {
        ErrorOutcome::SignIn => redirect_to_login(),
        ErrorOutcome::Show(message) => {
            log::error!("{:#}", err);
            target.set(Some(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::api::Unauthorized;

    #[test]
    fn expired_session_goes_to_login() {
        let err = anyhow::Error::new(Unauthorized).context("Failed to load budget");
        assert_eq!(error_outcome(&err), ErrorOutcome::SignIn);
    }

    #[test]
    fn other_errors_show_their_message() {
        let err = anyhow!("Failed to delete item");
        assert_eq!(
            error_outcome(&err),
            ErrorOutcome::Show("Failed to delete item".to_string())
        );
    }
}
