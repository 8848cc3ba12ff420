//! Application configuration

use std::sync::OnceLock;

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured GraphQL endpoint
pub fn api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or("/api")
}

/// Stripe publishable key, baked in at build time.
///
/// The client is a WASM bundle with no process environment, so the key
/// is resolved from `STRIPE_PUBLISHABLE_KEY` when the bundle is built.
pub fn stripe_publishable_key() -> &'static str {
    option_env!("STRIPE_PUBLISHABLE_KEY").unwrap_or("")
}

/// OAuth URL where hosts connect their Stripe account.
pub fn stripe_connect_url() -> String {
    let client_id = option_env!("STRIPE_CLIENT_ID").unwrap_or("");
    format!(
        "https://connect.stripe.com/oauth/authorize?response_type=code&client_id={client_id}&scope=read_write"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_default_then_override() {
        assert_eq!(api_url(), "/api");

        init_api_url("https://api.example.com/api".to_string());
        assert_eq!(api_url(), "https://api.example.com/api");

        // Subsequent init calls are ignored
        init_api_url("https://other.example.com".to_string());
        assert_eq!(api_url(), "https://api.example.com/api");
    }
}
