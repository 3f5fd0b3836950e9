//! Derivation of room and module states from backend telemetry snapshots.
//!
//! Every function here is synchronous and reads nothing but its arguments.

pub mod alert;
pub mod assignment;
pub mod comfort;
pub mod filter;
pub mod normalize;
pub mod stats;
pub mod view;

pub use alert::*;
pub use assignment::*;
pub use comfort::*;
pub use filter::*;
pub use normalize::*;
pub use stats::*;
pub use view::*;
