#![doc(test(attr(deny(warnings))))]

//! Billed Core renders an employee's expense reports ("bills"): it orders
//! them by date, describes the resulting page, and hands that description to
//! a terminal or HTML presenter.

pub mod app;
pub mod cli;
pub mod ordering;
pub mod errors;
pub mod render;
pub mod store;
pub mod utils;

pub use billed_domain::{Bill, BillStatus};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Billed Core tracing initialized.");
    });
}
