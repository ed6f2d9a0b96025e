#![allow(clippy::expect_used, clippy::unwrap_used, dead_code)]
//! Database-backed integration tests.
//!
//! Every test acquires its own isolated database and a fresh salvo
//! service wired the same way as `main.rs`, so tests run in parallel
//! without sharing state.

mod auth;
mod bookings;
mod helpers;
mod properties;
