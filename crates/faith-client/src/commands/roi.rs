use tracing::info;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::RoiData;
use crate::engine::compute_roi;
use crate::engine::policy::ROI_POLICY_VERSION;
use crate::engine::roi::{RoiInput, RoiOverrides};
use crate::input::{parse_document, resolve_source};

/// Inputs start from the default scenario, then the optional document, then
/// explicit `overrides`; later layers win field by field.
#[derive(Debug, Default)]
pub struct RoiRunOptions {
    pub file: Option<String>,
    pub overrides: RoiOverrides,
    pub stdin_override: Option<String>,
}

pub fn run(options: RoiRunOptions) -> ClientResult<SuccessEnvelope> {
    let mut inputs = RoiInput::default_scenario();
    let mut source_label = "default_scenario".to_string();
    let mut source_ref = None;

    if let Some(path) = options.file.as_deref() {
        let source = resolve_source(Some(path), options.stdin_override, "roi")?;
        let document = parse_document::<RoiOverrides>(&source, "roi")?;
        inputs = inputs.overlay(&document);
        source_label = source.kind.as_str().to_string();
        source_ref = source.source_ref;
    }
    inputs = inputs.overlay(&options.overrides);

    let output = compute_roi(&inputs)?;
    info!(
        package = output.package.as_str(),
        roi_percentage = output.roi_percentage,
        "roi complete"
    );

    let data = RoiData::from_output(&output, inputs, &source_label, source_ref);
    success("roi", ROI_POLICY_VERSION, data)
}
