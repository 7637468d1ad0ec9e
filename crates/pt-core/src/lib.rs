//! pt-core: stable foundation for phasetab.
//!
//! Contains:
//! - units (uom SI types + constructors for table units, °C and bar)
//! - numeric (Real + float guards + linear interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PtError, PtResult};
pub use numeric::*;
pub use units::*;
