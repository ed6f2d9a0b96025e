//! Shared foundation for the roost marketplace server: configuration
//! loading, route constants, and core error types.

pub mod config;
pub mod constants;
pub mod error;
