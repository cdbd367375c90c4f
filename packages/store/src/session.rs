//! The session and its storage seam.

/// Interface for persisting the session token.
///
/// localStorage is synchronous, so the trait is too. Implementations must
/// treat a missing or unavailable backend as "no token" rather than failing.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Exclusive owner of the authentication token.
///
/// Holds at most one token; its presence is the sole signal of
/// "authenticated". Every mutation is mirrored to the backing store. There is
/// no expiry tracking; a token's validity is only discovered when the server
/// rejects a request with 401.
#[derive(Clone, Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Create a session, rehydrating any token the store already holds.
    pub fn new(store: S) -> Self {
        let token = store.load();
        Self { store, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a freshly issued token, making it visible to all consumers
    /// and durable across reloads.
    pub fn login(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
    }

    /// Drop the token from memory and from the backing store.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
    }
}

impl<S: TokenStore> PartialEq for Session<S> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}
