//! pvt-core: shared error and unit primitives for pvtflow.

pub mod error;
pub mod units;

pub use error::{PvtError, PvtResult};
