//! Shared gateway-client constructor.
//!
//! The client is cheap to build (a base URL and a reqwest handle), so call
//! sites construct one per action instead of threading it through context.

/// Create a client bound to the compile-time API base URL.
pub fn make_client() -> api::Client {
    api::Client::from_env()
}
