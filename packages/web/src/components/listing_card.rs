//! Listing card component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Listing;

/// Card displaying a single listing inside a grid
#[component]
pub fn ListingCard(listing: Listing) -> Element {
    // Prices are stored in cents
    let price = listing.price / 100;

    rsx! {
        Link {
            to: Route::Listing { id: listing.id.clone() },
            class: "listing-card",

            div {
                class: "listing-card__image",
                img { src: "{listing.image}", alt: "{listing.title}" }
            }

            div {
                class: "listing-card__details",
                p {
                    class: "listing-card__price",
                    span { "${price}" }
                    "/day"
                }
                h4 { class: "listing-card__title", "{listing.title}" }
                p { class: "listing-card__address", "{listing.address}" }
                span {
                    class: "listing-card__guests",
                    "{listing.num_of_guests} guests"
                }
            }
        }
    }
}

/// Placeholder card shown while a listing grid loads
#[component]
pub fn ListingCardSkeleton() -> Element {
    rsx! {
        div {
            class: "listing-card listing-card--skeleton",
            div { class: "listing-card__image listing-card__image--skeleton" }
            div {
                class: "listing-card__details",
                div { class: "skeleton-line skeleton-line--short" }
                div { class: "skeleton-line" }
                div { class: "skeleton-line" }
            }
        }
    }
}
