//! Catch-all page

use dioxus::prelude::*;

use crate::routes::Route;

/// Rendered for any path outside the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));

    rsx! {
        div {
            class: "not-found",
            h2 { "Uh oh! Something went wrong :(" }
            p { "The page you're looking for can't be found." }
            Link { to: Route::Home {}, class: "not-found__cta", "Go to Home" }
        }
    }
}
