//! Root application component

use dioxus::prelude::*;

use crate::components::PageSkeleton;
use crate::payments::StripeProvider;
use crate::routes::Route;
use crate::viewer::{use_viewer, ViewerProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Viewer context provider wraps the entire app
        ViewerProvider {
            Gate {}
        }
    }
}

/// Render gate between the bootstrap skeleton and the routed shell.
///
/// Until the login check settles (and no error is recorded) the viewer
/// sees only the skeleton; afterwards the full shell renders, with the
/// failure banner handled by the shell layout.
#[component]
fn Gate() -> Element {
    let viewer_ctx = use_viewer();

    if !viewer_ctx.viewer.read().did_request && viewer_ctx.error.read().is_none() {
        return rsx! {
            PageSkeleton {}
        };
    }

    rsx! {
        StripeProvider {
            Router::<Route> {}
        }
    }
}
