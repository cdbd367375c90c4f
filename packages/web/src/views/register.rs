//! Registration screen.

use std::time::Duration;

use dioxus::prelude::*;

use api::ApiError;
use ui::components::{Button, ErrorBanner, Input};
use ui::{make_client, validate};

use crate::guards::RedirectIfAuthenticated;
use crate::Route;

/// How long the success notice stays up before moving on to login.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
enum RegisterState {
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RegisterState {
    fn is_pending(&self) -> bool {
        matches!(self, RegisterState::Pending)
    }

    fn succeeded(&self) -> bool {
        matches!(self, RegisterState::Succeeded)
    }

    fn error(&self) -> Option<&str> {
        match self {
            RegisterState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn register_error_message(err: &ApiError) -> String {
    if err.is_conflict() {
        "Username or email already taken. Please try another.".to_string()
    } else if let Some(message) = err.server_message() {
        message.to_string()
    } else if err.is_network() {
        "Network error. Please check your connection.".to_string()
    } else {
        "An unexpected error occurred during registration.".to_string()
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        RedirectIfAuthenticated {
            RegisterPage {}
        }
    }
}

#[component]
fn RegisterPage() -> Element {
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(|| RegisterState::Idle);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let email = email();
            let username = username();
            let password = password();

            // Validation failures never reach the network
            if let Err(message) = validate::validate_registration(&email, &username, &password) {
                state.set(RegisterState::Failed(message));
                return;
            }

            state.set(RegisterState::Pending);
            match make_client().register(&email, &username, &password).await {
                Ok(()) => {
                    state.set(RegisterState::Succeeded);
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    state.set(RegisterState::Failed(register_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "screen-center",
            div { class: "card auth-card",
                h2 { "Create Account" }

                if let Some(message) = state().error() {
                    ErrorBanner { message: "{message}" }
                }
                if state().succeeded() {
                    div { class: "banner banner-success", role: "alert",
                        strong { "Success! " }
                        span { "Registration successful. Redirecting to login..." }
                    }
                }

                form { class: "auth-form", onsubmit: handle_register,
                    label { r#for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Your email address",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "username", "Username" }
                    Input {
                        id: "username",
                        placeholder: "Choose a username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "At least 6 characters",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: state().is_pending(),
                        if state().is_pending() { "Registering..." } else { "Register" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login here" }
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
    fn test_conflict_maps_to_taken_message() {
        assert_eq!(
            register_error_message(&status(409, None)),
            "Username or email already taken. Please try another."
        );
        assert_eq!(
            register_error_message(&status(409, Some("duplicate"))),
            "Username or email already taken. Please try another."
        );
    }

    #[test]
    fn test_server_message_passes_through() {
        assert_eq!(
            register_error_message(&status(400, Some("Username too short"))),
            "Username too short"
        );
    }

    #[test]
    fn test_generic_fallback_without_message() {
        assert_eq!(
            register_error_message(&status(500, None)),
            "An unexpected error occurred during registration."
        );
    }

    #[test]
    fn test_state_predicates() {
        assert!(RegisterState::Pending.is_pending());
        assert!(RegisterState::Succeeded.succeeded());
        assert!(!RegisterState::Idle.is_pending());
        assert_eq!(
            RegisterState::Failed("taken".to_string()).error(),
            Some("taken")
        );
        assert!(RegisterState::Succeeded.error().is_none());
    }
}
