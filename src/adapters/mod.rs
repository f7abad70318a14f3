//! Production adapters implementing the traits in `crate::traits`.

pub mod reqwest_portal;

pub use reqwest_portal::HttpPortalApi;
