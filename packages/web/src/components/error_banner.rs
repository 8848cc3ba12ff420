//! Static error banner

use dioxus::prelude::*;

/// Non-retrying error banner pinned above the page content
#[component]
pub fn ErrorBanner(description: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            span { class: "error-banner__icon", "!" }
            div {
                class: "error-banner__text",
                p { class: "error-banner__title", "Uh oh! Something went wrong :(" }
                p { class: "error-banner__description", "{description}" }
            }
        }
    }
}
