//! Loading skeletons

use dioxus::prelude::*;

/// Header placeholder shown before the login check settles
#[component]
pub fn AppHeaderSkeleton() -> Element {
    rsx! {
        div {
            class: "app-header app-header--skeleton",
            div {
                class: "app-header__logo-search-section",
                span { class: "app-header__logo", "TinyHouse" }
            }
        }
    }
}

/// Centered spinner
#[component]
pub fn Spinner(tip: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            div {
                class: "spinner__dots",
                div { class: "spinner__dot" }
                div { class: "spinner__dot", style: "animation-delay: 0.1s" }
                div { class: "spinner__dot", style: "animation-delay: 0.2s" }
            }
            p { class: "spinner__tip", "{tip}" }
        }
    }
}

/// Full-page skeleton rendered while the login check is outstanding
#[component]
pub fn PageSkeleton() -> Element {
    rsx! {
        div {
            class: "app-skeleton",
            AppHeaderSkeleton {}
            div {
                class: "app-skeleton__spin-section",
                Spinner { tip: "Launching TinyHouse" }
            }
        }
    }
}
