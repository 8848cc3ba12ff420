//! Listings page

use dioxus::prelude::*;

use crate::components::{ListingCard, ListingCardSkeleton};
use crate::graphql::{browser_client, ClientError, LISTINGS};
use crate::routes::Route;
use crate::types::{ListingsFilter, ListingsResponse, PaginatedListings};

const PAGE_LIMIT: i32 = 8;

/// Listings for every region
#[component]
pub fn Listings() -> Element {
    rsx! {
        ListingsView { location: None::<String> }
    }
}

/// Listings narrowed to a location
#[component]
pub fn ListingsByLocation(location: String) -> Element {
    rsx! {
        ListingsView { location: Some(location) }
    }
}

#[component]
fn ListingsView(location: ReadOnlySignal<Option<String>>) -> Element {
    let mut filter = use_signal(|| ListingsFilter::PriceLowToHigh);

    let listings = use_resource(move || async move {
        fetch_listings(location(), filter()).await
    });

    rsx! {
        div {
            class: "listings",

            match &*listings.read() {
                None => rsx! {
                    div {
                        class: "listings-grid",
                        for i in 0..PAGE_LIMIT {
                            ListingCardSkeleton { key: "{i}" }
                        }
                    }
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "listings__error",
                        h2 { "We either couldn't find anything matching your search or have encountered an error." }
                        p {
                            "If you're searching for a unique location, try searching again with more common keywords."
                        }
                    }
                },
                Some(Ok(listings)) => rsx! {
                    if let Some(region) = &listings.region {
                        h2 { class: "listings__region", "Results for \"{region}\"" }
                    }

                    div {
                        class: "listings__filters",
                        label { "Sort by" }
                        select {
                            onchange: move |e| {
                                if let Some(value) = ListingsFilter::from_value(&e.value()) {
                                    filter.set(value);
                                }
                            },
                            for variant in ListingsFilter::variants() {
                                option {
                                    key: "{variant:?}",
                                    value: "{variant.value()}",
                                    selected: filter() == *variant,
                                    "{variant.label()}"
                                }
                            }
                        }
                    }

                    if listings.result.is_empty() {
                        div {
                            class: "listings__empty",
                            p { "It appears that no listings have yet been created for this region." }
                            p {
                                "Be the first person to create a "
                                Link { to: Route::Host {}, "listing in this area" }
                                "!"
                            }
                        }
                    } else {
                        div {
                            class: "listings-grid",
                            for listing in listings.result.iter() {
                                ListingCard { key: "{listing.id}", listing: listing.clone() }
                            }
                        }
                    }
                },
            }
        }
    }
}

async fn fetch_listings(
    location: Option<String>,
    filter: ListingsFilter,
) -> Result<PaginatedListings, ClientError> {
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
                location,
                filter,
                limit: PAGE_LIMIT,
                page: 1,
            }),
        )
        .await?;

    Ok(response.listings)
}
