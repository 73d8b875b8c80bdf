use thiserror::Error;

/// Failures raised by the pure calculation core.
///
/// Both variants are local to a single call; the engine never partially
/// succeeds, so callers decide whether to block, clamp, or re-prompt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A field is outside its documented domain (empty history, negative
    /// currency, non-finite number).
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// The inputs are individually valid but the requested metric is
    /// mathematically undefined for them.
    #[error("Cannot compute `{metric}`: {reason}")]
    DegenerateInput {
        metric: &'static str,
        reason: String,
    },
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: &str) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn degenerate(metric: &'static str, reason: &str) -> Self {
        Self::DegenerateInput {
            metric,
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DegenerateInput { .. } => "degenerate_input",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } => *field,
            Self::DegenerateInput { metric, .. } => *metric,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

pub(crate) fn require_finite(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(EngineError::invalid(field, "value must be a finite number"))
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> EngineResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(field, "value must not be negative"));
    }
    Ok(value)
}
