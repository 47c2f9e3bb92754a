//! Request middleware: trace identifiers and the cross-origin policy.

pub mod cors;
pub mod trace;

pub use cors::permissive_cors;
pub use trace::Trace;
