//! Small browser helpers.

/// Read a query-string parameter from the current location.
///
/// Used by the OAuth redirect pages to pick up the `code` parameter.
/// Returns `None` on the host or when the parameter is missing or empty.
pub fn search_param(name: &str) -> Option<String> {
    #[cfg(feature = "web")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        param_from_query(&search, name)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = name;
        None
    }
}

/// Navigate the browser to an external URL (OAuth consent screens).
pub fn redirect_to(url: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                tracing::warn!("failed to redirect to {url}");
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = url;
    }
}

/// Extract a parameter from a raw query string such as `?code=abc&x=y`.
fn param_from_query(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some(name) {
            let value = parts.next().unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_from_query() {
        assert_eq!(
            param_from_query("?code=ac_123&scope=read", "code"),
            Some("ac_123".to_string())
        );
        assert_eq!(
            param_from_query("code=ac_123", "code"),
            Some("ac_123".to_string())
        );
        assert_eq!(param_from_query("?scope=read", "code"), None);
        assert_eq!(param_from_query("?code=", "code"), None);
        assert_eq!(param_from_query("", "code"), None);
    }
}
