//! Host page

use dioxus::prelude::*;

use crate::graphql::{browser_client, HOST_LISTING};
use crate::routes::Route;
use crate::types::{HostListingInput, HostListingResponse, ListingType};
use crate::viewer::use_viewer;

/// Listing creation form, gated on a signed-in, wallet-connected viewer
#[component]
pub fn Host() -> Element {
    let viewer_ctx = use_viewer();
    let navigator = use_navigator();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut listing_type = use_signal(|| ListingType::Apartment);
    let mut address = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut num_of_guests = use_signal(String::new);

    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    if !viewer_ctx.is_signed_in() || !viewer_ctx.has_wallet() {
        return rsx! {
            div {
                class: "host host--gated",
                h2 { "You'll have to be signed in and connected with Stripe to host a listing!" }
                p {
                    "We only allow users who've signed in to our application and have connected with Stripe to host new listings. You can sign in at the "
                    Link { to: Route::Login {}, "login" }
                    " page and connect with Stripe shortly after."
                }
            }
        };
    }

    let handle_submit = move |_| {
        let input = match build_input(
            &title(),
            &description(),
            &image(),
            listing_type(),
            &address(),
            &price(),
            &num_of_guests(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            #[derive(serde::Serialize)]
            struct Variables {
                input: HostListingInput,
            }

            let result: Result<HostListingResponse, _> = browser_client()
                .mutate(HOST_LISTING, Some(Variables { input }))
                .await;

            match result {
                Ok(response) => {
                    navigator.push(Route::Listing {
                        id: response.host_listing.id,
                    });
                }
                Err(err) => {
                    tracing::warn!("host listing failed: {err}");
                    error.set(Some(
                        "Sorry! We weren't able to create your listing. Please try again later."
                            .to_string(),
                    ));
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "host",

            h2 { "Hi! Let's get started listing your place." }
            p { "In this form, we'll collect some basic and additional information about your listing." }

            if let Some(err) = error() {
                div { class: "host__error", "{err}" }
            }

            form {
                class: "host__form",
                onsubmit: handle_submit,

                label { "Home Type" }
                select {
                    onchange: move |e| {
                        let next = match e.value().as_str() {
                            "APARTMENT" => ListingType::Apartment,
                            "HOUSE" => ListingType::House,
                            _ => return,
                        };
                        listing_type.set(next);
                    },
                    option { value: "APARTMENT", selected: listing_type() == ListingType::Apartment, "Apartment" }
                    option { value: "HOUSE", selected: listing_type() == ListingType::House, "House" }
                }

                label { "Title" }
                input {
                    r#type: "text",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                    placeholder: "The iconic and luxurious Bel-Air mansion",
                    disabled: is_pending()
                }

                label { "Description" }
                textarea {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    placeholder: "Modern, clean, and iconic home of the Fresh Prince.",
                    disabled: is_pending()
                }

                label { "Address" }
                input {
                    r#type: "text",
                    value: "{address}",
                    oninput: move |e| address.set(e.value()),
                    placeholder: "251 North Bristol Avenue, Los Angeles, California",
                    disabled: is_pending()
                }

                label { "Image URL" }
                input {
                    r#type: "text",
                    value: "{image}",
                    oninput: move |e| image.set(e.value()),
                    placeholder: "https://...",
                    disabled: is_pending()
                }

                label { "Price (per day, in dollars)" }
                input {
                    r#type: "number",
                    value: "{price}",
                    oninput: move |e| price.set(e.value()),
                    placeholder: "120",
                    disabled: is_pending()
                }

                label { "Max number of guests" }
                input {
                    r#type: "number",
                    value: "{num_of_guests}",
                    oninput: move |e| num_of_guests.set(e.value()),
                    placeholder: "4",
                    disabled: is_pending()
                }

                button {
                    r#type: "submit",
                    disabled: is_pending(),
                    if is_pending() { "Creating..." } else { "Submit" }
                }
            }
        }
    }
}

/// Validate the form fields into a mutation input.
fn build_input(
    title: &str,
    description: &str,
    image: &str,
    listing_type: ListingType,
    address: &str,
    price: &str,
    num_of_guests: &str,
) -> Result<HostListingInput, String> {
    let title = title.trim();
    let description = description.trim();
    let image = image.trim();
    let address = address.trim();

    if title.is_empty() || description.is_empty() || image.is_empty() || address.is_empty() {
        return Err("Please complete all required fields!".to_string());
    }

    let dollars: i32 = price
        .trim()
        .parse()
        .map_err(|_| "Price must be a whole number of dollars!".to_string())?;
    if dollars <= 0 {
        return Err("Price must be greater than zero!".to_string());
    }

    let num_of_guests: i32 = num_of_guests
        .trim()
        .parse()
        .map_err(|_| "Number of guests must be a whole number!".to_string())?;
    if num_of_guests <= 0 {
        return Err("Your listing must accommodate at least one guest!".to_string());
    }

    Ok(HostListingInput {
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        listing_type,
        address: address.to_string(),
        // The API stores prices in cents
        price: dollars * 100,
        num_of_guests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_converts_dollars_to_cents() {
        let input = build_input(
            "Bel-Air mansion",
            "Iconic home",
            "https://cdn.example.com/mansion.jpg",
            ListingType::House,
            "251 North Bristol Avenue, Los Angeles",
            "120",
            "4",
        )
        .unwrap();

        assert_eq!(input.price, 12000);
        assert_eq!(input.num_of_guests, 4);
        assert_eq!(input.listing_type, ListingType::House);
    }

    #[test]
    fn test_build_input_rejects_blank_fields() {
        let result = build_input(
            "  ",
            "Iconic home",
            "https://cdn.example.com/mansion.jpg",
            ListingType::House,
            "251 North Bristol Avenue",
            "120",
            "4",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_input_rejects_bad_numbers() {
        let base = |price: &str, guests: &str| {
            build_input(
                "Title",
                "Description",
                "https://cdn.example.com/img.jpg",
                ListingType::Apartment,
                "Address",
                price,
                guests,
            )
        };

        assert!(base("twelve", "4").is_err());
        assert!(base("0", "4").is_err());
        assert!(base("-5", "4").is_err());
        assert!(base("120", "0").is_err());
        assert!(base("120", "1.5").is_err());
    }
}
