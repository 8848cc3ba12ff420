//! User profile page

use dioxus::prelude::*;

use crate::components::{ListingCard, ListingCardSkeleton};
use crate::config;
use crate::graphql::{browser_client, ClientError, USER};
use crate::types::{User as UserData, UserResponse};
use crate::util;
use crate::viewer::use_viewer;

const LISTINGS_LIMIT: i32 = 4;

/// Profile page for a user, with their listings
#[component]
pub fn User(id: String) -> Element {
    let viewer_ctx = use_viewer();

    let viewer_is_user = viewer_ctx.viewer.read().id.as_deref() == Some(id.as_str());

    let user = {
        let id = id.clone();
        use_resource(move || {
            let id = id.clone();
            async move { fetch_user(id).await }
        })
    };

    rsx! {
        div {
            class: "user",

            match &*user.read() {
                None => rsx! {
                    div {
                        class: "user__loading",
                        div { class: "skeleton-line skeleton-line--short" }
                        div { class: "skeleton-line" }
                    }
                },
                Some(Err(_)) => rsx! {
                    div {
                        class: "user__error",
                        h2 { "This user may not exist or we've encountered an error." }
                        p { "Please try again soon." }
                    }
                },
                Some(Ok(user)) => rsx! {
                    div {
                        class: "user__profile",
                        img { class: "user__avatar", src: "{user.avatar}", alt: "{user.name}" }
                        h2 { "{user.name}" }
                        p { class: "user__contact", "Contact: {user.contact}" }

                        if viewer_is_user {
                            if user.has_wallet {
                                div {
                                    class: "user__wallet",
                                    p { "Stripe is connected." }
                                    if let Some(income) = user.income {
                                        p {
                                            "Income earned: $"
                                            {(income / 100).to_string()}
                                        }
                                    }
                                }
                            } else {
                                div {
                                    class: "user__wallet",
                                    p {
                                        "Interested in becoming a TinyHouse host? Register with your Stripe account!"
                                    }
                                    button {
                                        class: "user__connect-stripe",
                                        onclick: move |_| util::redirect_to(&config::stripe_connect_url()),
                                        "Connect with Stripe"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "user__listings",
                        h3 { "Listings" }
                        if let Some(listings) = &user.listings {
                            if listings.result.is_empty() {
                                p { "This user doesn't have any listings yet!" }
                            } else {
                                div {
                                    class: "listings-grid",
                                    for listing in listings.result.iter() {
                                        ListingCard { key: "{listing.id}", listing: listing.clone() }
                                    }
                                }
                            }
                        } else {
                            div {
                                class: "listings-grid",
                                for i in 0..LISTINGS_LIMIT {
                                    ListingCardSkeleton { key: "{i}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

async fn fetch_user(id: String) -> Result<UserData, ClientError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        id: String,
        listings_page: i32,
        limit: i32,
    }

    let response: UserResponse = browser_client()
        .query(
            USER,
            Some(Variables {
                id,
                listings_page: 1,
                limit: LISTINGS_LIMIT,
            }),
        )
        .await?;

    Ok(response.user)
}
