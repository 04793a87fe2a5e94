#![doc(test(attr(deny(warnings))))]

//! Points Core tracks loyalty and rewards balances across programs and
//! estimates their cash value from per-program redemption rates.

pub mod catalog;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod storage;
pub mod utils;
pub mod valuation;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Points Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
