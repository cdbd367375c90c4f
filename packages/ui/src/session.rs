//! Session context and hooks.

use dioxus::prelude::*;
use store::Session;

/// Token backend for the current platform:
/// - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalTokens`]
/// - **Everything else** (tests, native tooling): [`store::MemoryTokens`]
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type SessionTokens = store::LocalTokens;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type SessionTokens = store::MemoryTokens;

pub type SessionSignal = Signal<Session<SessionTokens>>;

/// Build the platform session, rehydrating any persisted token.
pub fn make_session() -> Session<SessionTokens> {
    Session::new(SessionTokens::default())
}

/// Get the current session.
///
/// Reads are reactive; mutate through `.write()` so guards and views rerender
/// on login/logout.
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}

/// Provider component that owns session state for the whole app.
/// Wrap the router with this component; it is initialized once at startup.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider::<SessionSignal>(|| Signal::new(make_session()));

    rsx! {
        {children}
    }
}
