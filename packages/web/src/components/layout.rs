//! Application shell layout

use dioxus::prelude::*;

use crate::routes::Route;
use crate::viewer::use_viewer;
use super::{AppHeader, ErrorBanner};

/// Shell wrapping every routed page: failure banner slot, affixed
/// header, page outlet.
#[component]
pub fn AppShell() -> Element {
    let viewer_ctx = use_viewer();

    rsx! {
        div {
            id: "app",

            if viewer_ctx.error.read().is_some() {
                ErrorBanner {
                    description: "We weren't able to verify if you were logged in. Please try again later!"
                }
            }

            div {
                class: "app__affix-header",
                AppHeader {}
            }

            Outlet::<Route> {}
        }
    }
}
