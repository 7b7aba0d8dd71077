//! DNS verify infrastructure layer
pub mod dns;
pub mod repositories;
