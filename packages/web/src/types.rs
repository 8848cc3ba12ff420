//! Type definitions for GraphQL API responses

use serde::{Deserialize, Serialize};

// ============================================================================
// Viewer Types
// ============================================================================

/// The current user's client-side session record.
///
/// Replaced wholesale on each login mutation completion. `did_request`
/// flips to true after the one-time login check settles; the server sets
/// it on every login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub id: Option<String>,
    pub token: Option<String>,
    pub avatar: Option<String>,
    pub has_wallet: Option<bool>,
    #[serde(default)]
    pub did_request: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogInInput {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectStripeInput {
    pub code: String,
}

// ============================================================================
// Listing Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    Apartment,
    House,
}

impl ListingType {
    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Apartment => "Apartment",
            ListingType::House => "House",
        }
    }
}

/// Sort order for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingsFilter {
    PriceLowToHigh,
    PriceHighToLow,
}

impl ListingsFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ListingsFilter::PriceLowToHigh => "Price: Low to High",
            ListingsFilter::PriceHighToLow => "Price: High to Low",
        }
    }

    pub fn variants() -> &'static [ListingsFilter] {
        &[ListingsFilter::PriceLowToHigh, ListingsFilter::PriceHighToLow]
    }

    /// Wire value, as serialized into GraphQL variables
    pub fn value(&self) -> &'static str {
        match self {
            ListingsFilter::PriceLowToHigh => "PRICE_LOW_TO_HIGH",
            ListingsFilter::PriceHighToLow => "PRICE_HIGH_TO_LOW",
        }
    }

    pub fn from_value(value: &str) -> Option<ListingsFilter> {
        ListingsFilter::variants()
            .iter()
            .copied()
            .find(|variant| variant.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingHost {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub has_wallet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub host: Option<ListingHost>,
    #[serde(rename = "type")]
    pub listing_type: Option<ListingType>,
    pub address: String,
    pub city: Option<String>,
    /// Nightly price in cents
    pub price: i32,
    pub num_of_guests: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedListings {
    pub region: Option<String>,
    pub total: i32,
    pub result: Vec<Listing>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostListingInput {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub address: String,
    pub price: i32,
    pub num_of_guests: i32,
}

// ============================================================================
// User Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub contact: String,
    pub has_wallet: bool,
    /// Only present when viewing one's own profile
    pub income: Option<i32>,
    pub listings: Option<PaginatedListings>,
}

// ============================================================================
// GraphQL Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub log_in: Viewer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutResponse {
    pub log_out: Viewer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectStripeResponse {
    pub connect_stripe: Viewer,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub listing: Listing,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub listings: PaginatedListings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: User,
}

/// Only the id comes back from `hostListing`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedListing {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostListingResponse {
    pub host_listing: CreatedListing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_default_is_empty() {
        let viewer = Viewer::default();
        assert!(viewer.id.is_none());
        assert!(viewer.token.is_none());
        assert!(viewer.avatar.is_none());
        assert!(viewer.has_wallet.is_none());
        assert!(!viewer.did_request);
    }

    #[test]
    fn test_log_in_response_parses_full_viewer() {
        let json = r#"{
            "logIn": {
                "id": "u1",
                "token": "csrf-token",
                "avatar": "https://cdn.example.com/u1.png",
                "hasWallet": true,
                "didRequest": true
            }
        }"#;

        let response: LogInResponse = serde_json::from_str(json).unwrap();
        let viewer = response.log_in;
        assert_eq!(viewer.id.as_deref(), Some("u1"));
        assert_eq!(viewer.token.as_deref(), Some("csrf-token"));
        assert_eq!(viewer.has_wallet, Some(true));
        assert!(viewer.did_request);
    }

    #[test]
    fn test_log_in_response_parses_empty_viewer() {
        // A visitor with no session cookie gets back only didRequest.
        let json = r#"{
            "logIn": {
                "id": null,
                "token": null,
                "avatar": null,
                "hasWallet": null,
                "didRequest": true
            }
        }"#;

        let response: LogInResponse = serde_json::from_str(json).unwrap();
        let viewer = response.log_in;
        assert!(viewer.id.is_none());
        assert!(viewer.token.is_none());
        assert!(viewer.did_request);
    }

    #[test]
    fn test_connect_stripe_parses_partial_viewer() {
        // connectStripe selects hasWallet only; everything else defaults.
        let json = r#"{ "connectStripe": { "hasWallet": true } }"#;

        let response: ConnectStripeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.connect_stripe.has_wallet, Some(true));
        assert!(!response.connect_stripe.did_request);
    }

    #[test]
    fn test_listings_response_parses() {
        let json = r#"{
            "listings": {
                "region": "Toronto, Ontario",
                "total": 1,
                "result": [
                    {
                        "id": "l1",
                        "title": "Cozy loft",
                        "image": "https://cdn.example.com/l1.jpg",
                        "address": "100 Queen St",
                        "price": 12000,
                        "numOfGuests": 2
                    }
                ]
            }
        }"#;

        let response: ListingsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.listings.region.as_deref(), Some("Toronto, Ontario"));
        assert_eq!(response.listings.result.len(), 1);
        assert_eq!(response.listings.result[0].price, 12000);
        assert!(response.listings.result[0].host.is_none());
    }

    #[test]
    fn test_listing_type_round_trips_screaming_case() {
        let json = r#""APARTMENT""#;
        let parsed: ListingType = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, ListingType::Apartment);
        assert_eq!(serde_json::to_string(&ListingType::House).unwrap(), r#""HOUSE""#);
    }

    #[test]
    fn test_listings_filter_serializes_for_variables() {
        let value = serde_json::to_value(ListingsFilter::PriceHighToLow).unwrap();
        assert_eq!(value, "PRICE_HIGH_TO_LOW");
    }

    #[test]
    fn test_listings_filter_value_matches_wire_format() {
        for variant in ListingsFilter::variants() {
            let wire = serde_json::to_value(variant).unwrap();
            assert_eq!(wire, variant.value());
            assert_eq!(ListingsFilter::from_value(variant.value()), Some(*variant));
        }
        assert_eq!(ListingsFilter::from_value("PRICE_SIDEWAYS"), None);
    }

    #[test]
    fn test_host_listing_input_uses_api_field_names() {
        let input = HostListingInput {
            title: "Beach house".to_string(),
            description: "Steps from the water".to_string(),
            image: "data:image/jpeg;base64,abc".to_string(),
            listing_type: ListingType::House,
            address: "1 Shore Rd, Santa Cruz, CA".to_string(),
            price: 25000,
            num_of_guests: 6,
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "HOUSE");
        assert_eq!(value["numOfGuests"], 6);
    }
}
