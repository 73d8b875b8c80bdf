//! Pure scoring and ROI calculations.
//!
//! Nothing in this module performs I/O or holds state; every entry point is a
//! plain function over already-parsed input records and is safe to call from
//! any thread.

pub mod classifier;
mod error;
pub mod impact;
pub mod policy;
pub mod roi;
pub mod samples;
pub mod types;

pub use classifier::classify;
pub use error::{EngineError, EngineResult};
pub use impact::analyze_impact;
pub use roi::compute_roi;
