//! Login screen.

use dioxus::prelude::*;

use api::ApiError;
use ui::components::{Button, ErrorBanner, Input};
use ui::{make_client, use_session, validate};

use crate::guards::RedirectIfAuthenticated;
use crate::Route;

/// Submission state; `Pending` disables the submit path so a double click
/// cannot issue two login requests.
#[derive(Debug, Clone, PartialEq)]
enum SubmitState {
    Idle,
    Pending,
    Failed(String),
}

impl SubmitState {
    fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }

    fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid username or password. Please try again.".to_string()
    } else if let Some(message) = err.server_message() {
        message.to_string()
    } else if err.is_network() {
        "Network error. Please check your connection.".to_string()
    } else {
        "An unexpected error occurred during login.".to_string()
    }
}

#[component]
pub fn Login() -> Element {
    rsx! {
        RedirectIfAuthenticated {
            LoginPage {}
        }
    }
}

#[component]
fn LoginPage() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(|| SubmitState::Idle);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let username = username();
            let password = password();

            if !validate::required(&username) || !validate::required(&password) {
                state.set(SubmitState::Failed(
                    "Please enter both username and password.".to_string(),
                ));
                return;
            }

            state.set(SubmitState::Pending);
            match make_client().login(&username, &password).await {
                Ok(token) => {
                    session.write().login(token);
                    nav.replace(Route::Checklists {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    state.set(SubmitState::Failed(login_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "screen-center",
            div { class: "card auth-card",
                h2 { "Welcome back!" }

                if let Some(message) = state().error() {
                    ErrorBanner { message: "{message}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    label { r#for: "username", "Username" }
                    Input {
                        id: "username",
                        placeholder: "Your username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: state().is_pending(),
                        if state().is_pending() { "Logging in..." } else { "Login" }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Status {
            status,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_unauthorized_maps_to_invalid_credentials() {
        assert_eq!(
            login_error_message(&status(401, None)),
            "Invalid username or password. Please try again."
        );
        // 401 wins even when the server also sent a message
        assert_eq!(
            login_error_message(&status(401, Some("bad token"))),
            "Invalid username or password. Please try again."
        );
    }

    #[test]
    fn test_server_message_passes_through() {
        assert_eq!(
            login_error_message(&status(423, Some("Account locked"))),
            "Account locked"
        );
    }

    #[test]
    fn test_generic_fallback_without_message() {
        assert_eq!(
            login_error_message(&status(500, None)),
            "An unexpected error occurred during login."
        );
    }

    #[test]
    fn test_pending_disables_submit() {
        assert!(SubmitState::Pending.is_pending());
        assert!(!SubmitState::Idle.is_pending());
        assert!(!SubmitState::Failed("x".to_string()).is_pending());
        assert_eq!(
            SubmitState::Failed("nope".to_string()).error(),
            Some("nope")
        );
        assert!(SubmitState::Idle.error().is_none());
    }
}
