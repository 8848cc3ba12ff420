//! Page-level views

mod home;
mod host;
mod listing;
mod listings;
mod login;
mod not_found;
mod stripe;
mod user;

pub use home::*;
pub use host::*;
pub use listing::*;
pub use listings::*;
pub use login::*;
pub use not_found::*;
pub use stripe::*;
pub use user::*;
