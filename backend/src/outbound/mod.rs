//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Only PostgreSQL persistence exists; adapters translate between Diesel
//! rows and domain records and contain no business rules.

pub mod persistence;
