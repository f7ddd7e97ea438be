#![doc(test(attr(deny(warnings))))]

//! Taka Core offers the aggregation, ranking, payoff-projection, and
//! e-mandate primitives that power the mobile-banking demo screens.

pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod leaderboard;
pub mod planner;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Taka Core tracing initialized.");
    });
}
