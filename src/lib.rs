//! PSM numerics
//!
//! Configuration and property checks for the `psm_math` linear algebra
//! library, which is re-exported here as [`math`].

pub mod check;
pub mod config;

pub use psm_math as math;
