//! Stripe connect return page

use dioxus::prelude::*;

use crate::components::Spinner;
use crate::graphql::{browser_client, CONNECT_STRIPE};
use crate::routes::Route;
use crate::types::{ConnectStripeInput, ConnectStripeResponse, Viewer};
use crate::util;
use crate::viewer::use_viewer;

/// Handles the OAuth return leg of connecting a Stripe wallet.
///
/// Stripe redirects back here with a `code` query parameter; the
/// mutation exchanges it and flips the viewer's wallet flag.
#[component]
pub fn Stripe() -> Element {
    let viewer_ctx = use_viewer();
    let navigator = use_navigator();

    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if let Some(code) = util::search_param("code") {
            spawn(async move {
                #[derive(serde::Serialize)]
                struct Variables {
                    input: ConnectStripeInput,
                }

                let result: Result<ConnectStripeResponse, _> = browser_client()
                    .mutate(
                        CONNECT_STRIPE,
                        Some(Variables {
                            input: ConnectStripeInput { code },
                        }),
                    )
                    .await;

                match result {
                    Ok(response) => {
                        let updated = {
                            let current = viewer_ctx.viewer.read().clone();
                            Viewer {
                                has_wallet: response.connect_stripe.has_wallet,
                                ..current
                            }
                        };
                        let mut viewer = viewer_ctx.viewer;
                        viewer.set(updated);

                        let id = viewer_ctx.viewer.read().id.clone();
                        if let Some(id) = id {
                            navigator.push(Route::User { id });
                        }
                    }
                    Err(err) => {
                        tracing::warn!("stripe connect failed: {err}");
                        error.set(Some(
                            "We weren't able to connect you with Stripe. Please try again later!"
                                .to_string(),
                        ));
                    }
                }
            });
        }
    });

    // Only a signed-in viewer can land here meaningfully.
    if !viewer_ctx.is_signed_in() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    if let Some(err) = error() {
        return rsx! {
            div {
                class: "stripe stripe--error",
                h2 { "{err}" }
            }
        };
    }

    rsx! {
        div {
            class: "stripe",
            Spinner { tip: "Connecting your Stripe account..." }
        }
    }
}
