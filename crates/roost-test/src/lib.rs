//! Roost marketplace server - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `roost::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use roost_core::*;
    pub use roost_service::*;

    // Re-export db crate with all its public modules
    pub mod db {
        pub use roost_db::db::*;

        // Additional db handlers from app
        pub mod connection {
            pub use roost_app::db_handler::DbProviderHandler;
            pub use roost_db::db::connection::*;
        }
    }

    // Re-export models
    pub mod model {
        pub use roost_db::model::*;
    }

    // Re-export app middleware and handlers
    pub mod middleware {
        pub use roost_app::middleware::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use roost_app::config::ConfigHandler;
        pub use roost_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use roost_app::*;

    pub mod api {
        pub use roost_app::app::api::*;
    }
}
