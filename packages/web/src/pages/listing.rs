//! Listing detail page

use dioxus::prelude::*;

use crate::graphql::{browser_client, ClientError, LISTING};
use crate::payments::Elements;
use crate::types::{Listing as ListingData, ListingResponse};
use crate::viewer::use_viewer;

/// Single listing with its booking panel
#[component]
pub fn Listing(id: String) -> Element {
    let viewer_ctx = use_viewer();

    let listing = {
        let id = id.clone();
        use_resource(move || {
            let id = id.clone();
            async move { fetch_listing(id).await }
        })
    };

    rsx! {
        div {
            class: "listing",

            match &*listing.read() {
                None => rsx! {
                    div { class: "listing__loading", div { class: "skeleton-line" } div { class: "skeleton-line" } }
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "listing__error",
                        h2 { "This listing may not exist or we've encountered an error." }
                        p { "Please try again soon!" }
                    }
                },
                Some(Ok(listing)) => rsx! {
                    div {
                        class: "listing__details",
                        img { class: "listing__image", src: "{listing.image}", alt: "{listing.title}" }
                        h1 { class: "listing__title", "{listing.title}" }
                        p { class: "listing__address", "{listing.address}" }

                        if let Some(host) = &listing.host {
                            div {
                                class: "listing__host",
                                img { src: "{host.avatar}", alt: "{host.name}" }
                                span { "{host.name}" }
                            }
                        }

                        if let Some(listing_type) = listing.listing_type {
                            span { class: "listing__type", "{listing_type.label()}" }
                        }
                        span { class: "listing__guests", "{listing.num_of_guests} guests" }

                        if let Some(description) = &listing.description {
                            p { class: "listing__description", "{description}" }
                        }
                    }

                    // Card fields mount under the payment provider's key
                    Elements {
                        BookingPanel {
                            price: listing.price,
                            signed_in: viewer_ctx.is_signed_in(),
                        }
                    }
                },
            }
        }
    }
}

/// Booking sidebar; checkout itself happens against the payment provider
#[component]
fn BookingPanel(price: i32, signed_in: bool) -> Element {
    let nightly = price / 100;

    rsx! {
        div {
            class: "listing__booking",
            p {
                class: "listing__booking-price",
                span { "${nightly}" }
                "/day"
            }
            if signed_in {
                button { class: "listing__booking-button", "Request to book!" }
            } else {
                p { class: "listing__booking-note", "You have to be signed in to book a listing!" }
            }
        }
    }
}

async fn fetch_listing(id: String) -> Result<ListingData, ClientError> {
    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
    }

    let response: ListingResponse = browser_client()
        .query(LISTING, Some(Variables { id }))
        .await?;

    Ok(response.listing)
}
