//! Login page

use dioxus::prelude::*;

use crate::components::Spinner;
use crate::graphql::{browser_client, AUTH_URL};
use crate::routes::Route;
use crate::types::{AuthUrlResponse, LogInInput};
use crate::util;
use crate::viewer::use_viewer;

/// Login page.
///
/// Sends the visitor to the OAuth consent screen; the provider redirects
/// back here with a `code` query parameter, which completes the login.
#[component]
pub fn Login() -> Element {
    let viewer_ctx = use_viewer();
    let navigator = use_navigator();

    let mut logging_in = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // OAuth return leg: exchange the code for a viewer session.
    use_effect(move || {
        if let Some(code) = util::search_param("code") {
            spawn(async move {
                logging_in.set(true);

                match viewer_ctx.log_in(Some(LogInInput { code })).await {
                    Ok(()) => {
                        let id = viewer_ctx.viewer.read().id.clone();
                        if let Some(id) = id {
                            navigator.push(Route::User { id });
                        }
                    }
                    Err(err) => {
                        tracing::warn!("log in failed: {err}");
                        error.set(Some(
                            "Sorry! We weren't able to log you in. Please try again later!".to_string(),
                        ));
                    }
                }

                logging_in.set(false);
            });
        }
    });

    // Already signed in, nothing to do here.
    if let Some(id) = viewer_ctx.viewer.read().id.clone() {
        return rsx! {
            Redirect { to: Route::User { id } }
        };
    }

    if logging_in() {
        return rsx! {
            div {
                class: "login login--pending",
                Spinner { tip: "Logging you in..." }
            }
        };
    }

    let handle_sign_in = move |_| {
        spawn(async move {
            match browser_client().query::<(), AuthUrlResponse>(AUTH_URL, None).await {
                Ok(response) => util::redirect_to(&response.auth_url),
                Err(err) => {
                    tracing::warn!("failed to fetch the consent URL: {err}");
                    error.set(Some(
                        "Sorry! We weren't able to log you in. Please try again later!".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login",

            div {
                class: "login__card",
                h2 { "Log in to TinyHouse!" }

                if let Some(err) = error() {
                    div { class: "login__error", "{err}" }
                }

                button {
                    class: "login__google-button",
                    onclick: handle_sign_in,
                    "Sign in with Google"
                }
                p {
                    class: "login__note",
                    "Note: by signing in, you'll be redirected to the Google consent form to sign in with your Google account."
                }
            }
        }
    }
}
