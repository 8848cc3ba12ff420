//! Home page

use dioxus::prelude::*;

use crate::components::{ListingCard, ListingCardSkeleton};
use crate::graphql::{browser_client, ClientError, LISTINGS};
use crate::routes::Route;
use crate::types::{Listing, ListingsFilter, ListingsResponse};

const PREMIUM_LISTINGS_LIMIT: i32 = 4;

/// Home page - hero search plus the highest-priced listings
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let mut search = use_signal(String::new);

    let premium_listings = use_resource(fetch_premium_listings);

    let handle_search = move |_| {
        let value = search().trim().to_string();
        if value.is_empty() {
            return;
        }
        navigator.push(Route::ListingsByLocation { location: value });
    };

    rsx! {
        div {
            class: "home",

            div {
                class: "home__hero",
                h1 { class: "home__hero-title", "Find a place you'll love to stay at" }
                form {
                    class: "home__hero-search",
                    onsubmit: handle_search,
                    input {
                        r#type: "text",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        placeholder: "Search 'San Francisco'"
                    }
                    button { r#type: "submit", "Search" }
                }
                div {
                    class: "home__hero-cards",
                    Link { to: Route::ListingsByLocation { location: "Toronto".to_string() }, "Toronto" }
                    Link { to: Route::ListingsByLocation { location: "Dubai".to_string() }, "Dubai" }
                    Link { to: Route::ListingsByLocation { location: "Los Angeles".to_string() }, "Los Angeles" }
                    Link { to: Route::ListingsByLocation { location: "London".to_string() }, "London" }
                }
            }

            div {
                class: "home__cta",
                h2 { "Your guide for all things rental" }
                p { "Helping you make the best decisions in renting your last minute locations." }
                Link {
                    to: Route::ListingsByLocation { location: "United States".to_string() },
                    class: "home__cta-button",
                    "Popular listings in the United States"
                }
            }

            div {
                class: "home__listings",
                h2 { "Premium Listings" }

                match &*premium_listings.read() {
                    None => rsx! {
                        div {
                            class: "listings-grid",
                            for i in 0..PREMIUM_LISTINGS_LIMIT {
                                ListingCardSkeleton { key: "{i}" }
                            }
                        }
                    },
                    Some(Err(_)) => rsx! {
                        p {
                            class: "home__listings-error",
                            "We couldn't load the premium listings right now."
                        }
                    },
                    Some(Ok(listings)) => rsx! {
                        div {
                            class: "listings-grid",
                            for listing in listings.iter() {
                                ListingCard { key: "{listing.id}", listing: listing.clone() }
                            }
                        }
                    },
                }
            }

            div {
                class: "home__host-cta",
                h2 { "Ready to list your own place?" }
                Link { to: Route::Host {}, class: "home__host-cta-button", "Become a host" }
            }
        }
    }
}

async fn fetch_premium_listings() -> Result<Vec<Listing>, ClientError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        location: Option<String>,
        filter: ListingsFilter,
        limit: i32,
        page: i32,
    }

    let response: ListingsResponse = browser_client()
        .query(
            LISTINGS,
            Some(Variables {
                location: None,
                filter: ListingsFilter::PriceHighToLow,
                limit: PREMIUM_LISTINGS_LIMIT,
                page: 1,
            }),
        )
        .await?;

    Ok(response.listings.result)
}
