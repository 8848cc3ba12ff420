//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::pages::{
    Home, Host, Listing, Listings, ListingsByLocation, Login, NotFound, Stripe, User,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[route("/host")]
        Host {},

        #[route("/listing/:id")]
        Listing { id: String },

        #[route("/listings")]
        Listings {},

        #[route("/listings/:location")]
        ListingsByLocation { location: String },

        #[route("/login")]
        Login {},

        #[route("/stripe")]
        Stripe {},

        #[route("/user/:id")]
        User { id: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_each_path_maps_to_its_view() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
        assert_eq!(Route::from_str("/host").unwrap(), Route::Host {});
        assert_eq!(
            Route::from_str("/listing/l1").unwrap(),
            Route::Listing { id: "l1".to_string() }
        );
        assert_eq!(Route::from_str("/listings").unwrap(), Route::Listings {});
        assert_eq!(
            Route::from_str("/listings/toronto").unwrap(),
            Route::ListingsByLocation { location: "toronto".to_string() }
        );
        assert_eq!(Route::from_str("/login").unwrap(), Route::Login {});
        assert_eq!(Route::from_str("/stripe").unwrap(), Route::Stripe {});
        assert_eq!(
            Route::from_str("/user/u1").unwrap(),
            Route::User { id: "u1".to_string() }
        );
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_not_found() {
        assert_eq!(
            Route::from_str("/nope").unwrap(),
            Route::NotFound { segments: vec!["nope".to_string()] }
        );
        assert_eq!(
            Route::from_str("/listing/l1/extra").unwrap(),
            Route::NotFound {
                segments: vec!["listing".to_string(), "l1".to_string(), "extra".to_string()]
            }
        );
    }

    #[test]
    fn test_routes_render_back_to_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Listing { id: "l1".to_string() }.to_string(), "/listing/l1");
        assert_eq!(
            Route::ListingsByLocation { location: "toronto".to_string() }.to_string(),
            "/listings/toronto"
        );
        assert_eq!(Route::User { id: "u1".to_string() }.to_string(), "/user/u1");
    }
}
