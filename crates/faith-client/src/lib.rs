pub mod commands;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod input;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use engine::{EngineError, EngineResult, analyze_impact, classify, compute_roi};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
