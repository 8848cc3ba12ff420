//! Browser session storage for the viewer credential.
//!
//! The backend issues a CSRF token on login; it lives in session storage
//! under a single key and is echoed back on every GraphQL request. On
//! non-web builds the slot reads as absent and writes are no-ops, so the
//! crate compiles and tests on the host.

const TOKEN_KEY: &str = "token";

#[cfg(feature = "web")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// Read the stored credential, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "web")]
    {
        storage()?.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Persist the credential.
pub fn set_token(token: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("failed to persist session token");
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = token;
    }
}

/// Remove the credential.
pub fn remove_token() {
    #[cfg(feature = "web")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_absent_off_web() {
        // Host builds have no session storage; reads degrade to absent
        // and writes are silently dropped.
        set_token("abc");
        assert!(token().is_none());
        remove_token();
        assert!(token().is_none());
    }
}
