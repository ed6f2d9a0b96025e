//! Authentication and authorization flow.
//!
//! ## Module Organization
//!
//! - `authorize`: Ownership checks on listings and bookings
//! - `depot`: Helpers for extracting the authenticated user from Salvo requests
//! - `password`: Password hashing and verification with Argon2
//! - `token`: Stateless session tokens (signed, expiring)

pub mod authorize;
pub mod depot;
pub mod password;
pub mod token;

// Re-export commonly used types at module level
pub use authorize::{AuthzResult, authorize_owner};
pub use depot::{DepotUser, get_user_from_depot, get_user_id_from_depot};
pub use token::{Claims, issue_token, verify_token};
