//! Reusable UI components

mod error_banner;
mod header;
mod layout;
mod listing_card;
mod skeleton;

pub use error_banner::*;
pub use header::*;
pub use layout::*;
pub use listing_card::*;
pub use skeleton::*;
