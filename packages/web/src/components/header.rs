//! Application header with search and the viewer menu

use dioxus::prelude::*;

use crate::routes::Route;
use crate::viewer::use_viewer;

/// Header shown on every routed page
#[component]
pub fn AppHeader() -> Element {
    let viewer_ctx = use_viewer();
    let navigator = use_navigator();
    let mut search = use_signal(String::new);

    let handle_search = move |_| {
        let value = search().trim().to_string();
        if value.is_empty() {
            return;
        }
        navigator.push(Route::ListingsByLocation { location: value });
        search.set(String::new());
    };

    let handle_log_out = move |_| {
        spawn(async move {
            viewer_ctx.log_out().await;
        });
    };

    let viewer = viewer_ctx.viewer.read().clone();

    rsx! {
        div {
            class: "app-header",

            div {
                class: "app-header__logo-search-section",
                Link {
                    to: Route::Home {},
                    class: "app-header__logo",
                    "TinyHouse"
                }
                form {
                    class: "app-header__search",
                    onsubmit: handle_search,
                    input {
                        r#type: "text",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        placeholder: "Search 'San Francisco'"
                    }
                    button { r#type: "submit", "Search" }
                }
            }

            div {
                class: "app-header__menu-section",
                if let Some(id) = viewer.id.clone() {
                    Link {
                        to: Route::User { id },
                        class: "app-header__menu-profile",
                        if let Some(avatar) = &viewer.avatar {
                            img { class: "app-header__avatar", src: "{avatar}", alt: "Profile" }
                        } else {
                            "Profile"
                        }
                    }
                    button {
                        class: "app-header__log-out",
                        onclick: handle_log_out,
                        "Log out"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "app-header__sign-in",
                        "Sign In"
                    }
                }
            }
        }
    }
}
