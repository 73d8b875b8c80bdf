use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{SampleRow, SamplesData};
use crate::engine::classify;
use crate::engine::policy::SCORING_POLICY_VERSION;
use crate::engine::samples::SampleInvestment;

pub fn list() -> ClientResult<SuccessEnvelope> {
    let mut rows = Vec::with_capacity(SampleInvestment::ALL.len());
    for sample in SampleInvestment::ALL {
        let profile = sample.profile();
        let output = classify(&profile.scoring)?;
        rows.push(SampleRow::from_profile(&profile, &output));
    }

    success("samples", SCORING_POLICY_VERSION, SamplesData { rows })
}
