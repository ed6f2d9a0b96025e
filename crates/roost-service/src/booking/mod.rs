//! Bookings: reservation of a listing for a date range.

pub mod service;

pub use service::{BookingRequest, cancel, create, list_for_owner};
