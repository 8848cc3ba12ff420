//! Payment provider context.
//!
//! Tokenization itself belongs to the Stripe SDK loaded alongside the
//! bundle; this module only carries the publishable key to the views
//! that mount payment fields.

use dioxus::prelude::*;

use crate::config;

/// Payment-provider context available to the routed shell
#[derive(Clone)]
pub struct StripeContext {
    pub publishable_key: String,
}

/// Provider component that wraps the routed shell
#[component]
pub fn StripeProvider(children: Element) -> Element {
    use_context_provider(|| {
        let key = config::stripe_publishable_key();
        if key.is_empty() {
            tracing::warn!("STRIPE_PUBLISHABLE_KEY is not set; payment fields will not tokenize");
        }
        StripeContext {
            publishable_key: key.to_string(),
        }
    });

    children
}

/// Scope wrapper for payment fields.
///
/// Views that collect card details render inside it so the fields mount
/// under the provider's key.
#[component]
pub fn Elements(children: Element) -> Element {
    let stripe = use_stripe();

    rsx! {
        div {
            class: "stripe-elements",
            "data-publishable-key": "{stripe.publishable_key}",
            {children}
        }
    }
}

/// Hook to access the payment context
pub fn use_stripe() -> StripeContext {
    use_context::<StripeContext>()
}
