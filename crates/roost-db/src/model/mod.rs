pub mod booking;
pub mod property;
pub mod user;
