//! This crate contains the shared app layer for the workspace: the session
//! context, the gateway-client constructor, form widgets, validation, and the
//! small platform shims (dialogs, timers) the views lean on.

pub mod components;

mod client;
pub use client::make_client;

mod session;
pub use session::{make_session, use_session, SessionProvider, SessionSignal, SessionTokens};

mod dialog;
pub use dialog::{alert, confirm};

mod time;
pub use time::sleep;

pub mod validate;
