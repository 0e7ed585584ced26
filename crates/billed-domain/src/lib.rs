//! billed-domain
//!
//! Pure domain models for employee expense reports (bills).
//! No I/O, no rendering, no storage. Only data types and shared traits.

pub mod bill;
pub mod common;

pub use bill::*;
pub use common::*;
