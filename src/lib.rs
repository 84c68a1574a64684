#![doc(test(attr(deny(warnings))))]

//! Budget Dashboard turns a spreadsheet of planned versus actual spending into
//! category subtotals, portfolio totals and per-line budget health, ready for
//! any presentation layer to render.

pub mod budget;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Dashboard tracing initialized.");
    });
}
