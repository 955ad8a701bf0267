//! In-memory airport cache
//!
//! This module provides the airport store, which is loaded once from the
//! upstream source at startup and then answers filter queries against an
//! immutable snapshot for the rest of the process lifetime.

mod query;
mod store;

pub use query::{AirportQuery, Criteria};
pub use store::{AirportStore, StoreState};
