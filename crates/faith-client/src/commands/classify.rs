use tracing::info;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ClassifyData, InvestmentSummary};
use crate::engine::classify;
use crate::engine::policy::SCORING_POLICY_VERSION;
use crate::engine::samples::SampleInvestment;
use crate::error::ClientError;
use crate::input::{ClassifyDocument, parse_classify_document, resolve_source};

#[derive(Debug, Default)]
pub struct ClassifyRunOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
}

pub fn run(path: Option<String>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ClassifyRunOptions {
        path,
        stdin_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ClassifyRunOptions) -> ClientResult<SuccessEnvelope> {
    let source = resolve_source(options.path.as_deref(), options.stdin_override, "classify")?;
    let document = parse_classify_document(&source)?;
    let output = classify(document.scoring())?;

    let investment = match &document {
        ClassifyDocument::Profile(profile) => Some(InvestmentSummary::from(profile)),
        ClassifyDocument::Bare(_) => None,
    };
    info!(
        source = source.kind.as_str(),
        tier = output.tier.label(),
        "classify complete"
    );

    let data = ClassifyData::from_output(
        &output,
        source.kind.as_str(),
        source.source_ref.clone(),
        investment,
    );
    success("classify", SCORING_POLICY_VERSION, data)
}

pub fn run_sample(id: &str) -> ClientResult<SuccessEnvelope> {
    let sample = SampleInvestment::from_id(id).ok_or_else(|| ClientError::sample_not_found(id))?;
    let profile = sample.profile();
    let output = classify(&profile.scoring)?;

    let data = ClassifyData::from_output(
        &output,
        "sample",
        Some(profile.id.clone()),
        Some(InvestmentSummary::from(&profile)),
    );
    success("classify", SCORING_POLICY_VERSION, data)
}
