//! Database layer for the roost marketplace server: connection pooling,
//! schema, models, and embedded migrations.

pub mod db;
pub mod error;
pub mod model;
