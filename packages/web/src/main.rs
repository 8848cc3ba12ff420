//! TinyHouse - Dioxus Web Client
//!
//! Client-side single-page application for the TinyHouse rental
//! marketplace. Talks GraphQL to the `/api` backend.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod graphql;
mod pages;
mod payments;
mod routes;
mod session;
mod types;
mod util;
mod viewer;

fn main() {
    #[cfg(feature = "web")]
    {
        // Wire `tracing` output to the browser console
        dioxus::logger::initialize_default();

        dioxus::launch(app::App);
    }
}
