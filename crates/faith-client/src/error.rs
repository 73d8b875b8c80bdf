use serde_json::{Value, json};
use thiserror::Error;

use crate::engine::EngineError;
use crate::engine::samples::SampleInvestment;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `faith {cmd} --help` for usage."),
            None => "Run `faith --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn source_unreadable(path: &str, detail: &str, command: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Could not read input file `{path}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                format!("Rerun `faith {command} <path>`."),
            ],
        )
        .with_data(json!({
            "path": path,
        }))
    }

    pub fn malformed_json(detail: &str, line: usize, column: usize, command: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Input is not a valid {command} document: {detail}"),
            vec![
                "Fix the JSON at the reported line and column.".to_string(),
                format!("Run `faith {command} --help` to review the expected fields."),
            ],
        )
        .with_data(json!({
            "line": line,
            "column": column,
        }))
    }

    pub fn document_mismatch(detail: &str, command: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("Input does not match the {command} schema: {detail}"),
            vec![format!(
                "Run `faith {command} --help` to review the expected fields."
            )],
        )
    }

    pub fn sample_not_found(id: &str) -> Self {
        Self::new(
            "sample_not_found",
            &format!("Sample investment `{id}` does not exist."),
            vec![
                "Run `faith samples list` to see bundled sample ids.".to_string(),
                "Retry with `faith classify --sample <id>`.".to_string(),
            ],
        )
        .with_data(json!({
            "sample_id": id,
            "known_ids": SampleInvestment::ids(),
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

impl From<EngineError> for ClientError {
    fn from(error: EngineError) -> Self {
        let recovery_steps = match &error {
            EngineError::InvalidInput { field, .. } => vec![
                format!("Correct `{field}` in your input and rerun the command."),
                "Numbers must be finite; currency amounts must not be negative.".to_string(),
            ],
            EngineError::DegenerateInput { .. } => vec![
                "Provide at least one non-zero cost, hour, property, or performance figure."
                    .to_string(),
            ],
        };
        Self::new(error.code(), &error.to_string(), recovery_steps).with_data(json!({
            "field": error.field(),
        }))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
