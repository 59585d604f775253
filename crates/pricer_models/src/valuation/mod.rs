//! Batch valuation of commodity option records.
//!
//! Runs the Black-76 engine over a list of [`OptionContract`] records that
//! share one set of [`MarketParameters`], producing one
//! [`ValuationResult`] per record in input order.
//!
//! With the `parallel` feature, `value_batch_parallel` spreads the work
//! over the rayon thread pool.
//!
//! [`OptionContract`]: crate::instruments::commodity::OptionContract

mod batch;
mod error;

pub use batch::{value_all, value_batch, value_option, MarketParameters, ValuationResult};
#[cfg(feature = "parallel")]
pub use batch::value_batch_parallel;
pub use error::ValuationError;
