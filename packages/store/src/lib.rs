//! Client-side session persistence.
//!
//! The session token is the only durable client-side state. [`Session`] owns
//! it and mirrors every change to a [`TokenStore`] backend, so a later process
//! start can rehydrate login state. Backends live in sibling modules:
//! [`MemoryTokens`] for tests and non-web builds, [`LocalTokens`] (browser
//! localStorage) behind the `web` feature.

pub mod session;

mod memory;
pub use memory::MemoryTokens;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokens;

pub use session::{Session, TokenStore};

/// Fixed storage key the token is persisted under.
pub const TOKEN_KEY: &str = "token";
