//! Render-time gates over session state.
//!
//! Both guards are pure functions of the current session; neither keeps state
//! of its own.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Wraps views that require a logged-in user. Without a token, nothing
/// protected renders and the user lands on the login screen.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.read().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Keeps already-authenticated users away from the auth screens.
///
/// The redirect runs as an effect reacting to session changes rather than
/// inline in render, so logging in on the wrapped screen cannot loop the
/// same render pass.
#[component]
pub fn RedirectIfAuthenticated(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Checklists {});
        }
    });

    if session.read().is_authenticated() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
