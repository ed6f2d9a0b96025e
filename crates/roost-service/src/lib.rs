//! Business logic for the marketplace: authentication, listing and
//! booking workflows, and image storage. Everything here is transport
//! agnostic; the HTTP crate maps [`error::ServiceError`] onto status
//! codes.

pub mod auth;
pub mod booking;
pub mod error;
pub mod property;
pub mod storage;
pub mod user;
