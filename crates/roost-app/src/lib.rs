//! Salvo HTTP application for the marketplace.
//!
//! Wires configuration, the connection pool, and the image store into
//! the depot, authenticates bearer tokens in middleware, and exposes
//! the JSON API under `/api`.

pub mod app;
pub mod config;
pub mod db_handler;
pub mod error;
pub mod middleware;
