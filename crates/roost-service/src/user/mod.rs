//! User accounts: registration, lookup, credential verification.

pub mod service;

pub use service::{Registration, find_by_email, find_by_id, register, verify_credentials};
