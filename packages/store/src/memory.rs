use std::sync::{Arc, Mutex};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_starts_logged_out() {
        let session = Session::new(MemoryTokens::new());

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_stores_and_persists_token() {
        let tokens = MemoryTokens::new();
        let mut session = Session::new(tokens.clone());

        session.login("abc123".to_string());

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));
        // Mirrored to the backing store
        assert_eq!(tokens.load().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_rehydrates_from_store() {
        let tokens = MemoryTokens::new();
        tokens.save("persisted");

        // A new session (fresh process start) picks the token back up
        let session = Session::new(tokens);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("persisted"));
    }

    #[test]
    fn test_logout_clears_everywhere() {
        let tokens = MemoryTokens::new();
        let mut session = Session::new(tokens.clone());
        session.login("abc123".to_string());

        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(tokens.load().is_none());

        // A later session sees no stale token either
        assert!(!Session::new(tokens).is_authenticated());
    }

    #[test]
    fn test_login_replaces_previous_token() {
        let tokens = MemoryTokens::new();
        let mut session = Session::new(tokens.clone());

        session.login("first".to_string());
        session.login("second".to_string());

        assert_eq!(session.token(), Some("second"));
        assert_eq!(tokens.load().as_deref(), Some("second"));
    }

    #[test]
    fn test_sessions_compare_by_token() {
        let mut a = Session::new(MemoryTokens::new());
        let mut b = Session::new(MemoryTokens::new());
        assert_eq!(a, b);

        a.login("tok".to_string());
        assert_ne!(a, b);

        b.login("tok".to_string());
        assert_eq!(a, b);
    }
}
