use crate::session::TokenStore;
use crate::TOKEN_KEY;

/// TokenStore backed by browser localStorage.
///
/// Storage can be unavailable (private browsing, disabled cookies); reads then
/// report no token and writes are dropped, leaving the session memory-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokens;

impl LocalTokens {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalTokens {
    fn load(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
