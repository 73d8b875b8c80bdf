use tracing::info;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ImpactData;
use crate::engine::analyze_impact;
use crate::engine::impact::ImpactInput;
use crate::engine::policy::IMPACT_POLICY_VERSION;
use crate::input::{parse_document, resolve_source};

#[derive(Debug, Default)]
pub struct ImpactRunOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ImpactRunOptions {
        path,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ImpactRunOptions) -> ClientResult<SuccessEnvelope> {
    let source = resolve_source(options.path.as_deref(), options.stdin_override, "impact")?;
    let input = parse_document::<ImpactInput>(&source, "impact")?;
    let output = analyze_impact(&input)?;
    info!(
        kingdom_score = output.kingdom_score,
        recommendation = output.recommendation.as_str(),
        "impact complete"
    );

    let data = ImpactData::from_output(&output, source.kind.as_str(), source.source_ref.clone());
    success("impact", IMPACT_POLICY_VERSION, data)
}
