//! Property listings: creation, browsing, owner-gated mutation.

pub mod service;

pub use service::{NewListing, create, delete, get, list_all, list_for_owner, update};
