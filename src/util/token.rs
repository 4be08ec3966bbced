//! Bearer-token persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the single persisted piece of session state: it survives
//! reloads, is scoped to the origin, and its absence means "logged out".
//! The store is an opaque pass-through; nothing here inspects the token.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, if any. On the server there is no storage, so this
/// always reports an absent token.
pub fn get_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` as the current credential.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Discard the stored credential. A no-op when nothing is stored.
pub fn remove_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
