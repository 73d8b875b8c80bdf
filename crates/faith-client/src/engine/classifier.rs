use tracing::{debug, warn};

use crate::engine::error::{EngineError, EngineResult, require_finite, require_non_negative};
use crate::engine::policy::{SCORING_POLICY_V1, ScoringPolicy};
use crate::engine::types::{Grade, ScoringInput, ScoringOutput, Strength, SubScores, Tier};

/// Scores an investment and assigns its tier and grade using the v1 policy.
pub fn classify(input: &ScoringInput) -> EngineResult<ScoringOutput> {
    classify_with_policy(input, SCORING_POLICY_V1)
}

pub fn classify_with_policy(
    input: &ScoringInput,
    policy: ScoringPolicy,
) -> EngineResult<ScoringOutput> {
    let input = normalize(input)?;

    let sub_scores = SubScores {
        financial: financial_score(&input, policy)?,
        kingdom: kingdom_score(&input, policy),
        market: market_score(&input, policy),
        compliance: compliance_score(&input, policy),
    };
    let composite = policy.cap(policy.composite(
        sub_scores.financial,
        sub_scores.kingdom,
        sub_scores.market,
        sub_scores.compliance,
    ));
    let tier = Tier::from_score(composite);
    let grade = Grade::from_score(composite);

    debug!(
        financial = sub_scores.financial,
        kingdom = sub_scores.kingdom,
        market = sub_scores.market,
        compliance = sub_scores.compliance,
        composite,
        tier = tier.label(),
        grade = grade.as_str(),
        "classified investment"
    );

    Ok(ScoringOutput {
        sub_scores,
        composite,
        tier,
        grade,
        strengths: strengths(&input),
    })
}

fn financial_score(input: &ScoringInput, policy: ScoringPolicy) -> EngineResult<f64> {
    let average = mean(&input.historical_performance)?;
    let raw = policy.expected_return_points.points(input.expected_return)
        + (policy.risk_ceiling - input.risk_score) * policy.risk_multiplier
        + input.liquidity_score * policy.liquidity_multiplier
        + policy.history_points.points(average);
    Ok(policy.cap(raw))
}

fn kingdom_score(input: &ScoringInput, policy: ScoringPolicy) -> f64 {
    let raw = flag_points(input.bible_compliant, policy.bible_points)
        + input.esg_score * policy.esg_multiplier
        + input.community_impact * policy.community_multiplier
        + flag_points(input.ethical_business, policy.ethical_points)
        + flag_points(input.faith_leadership, policy.faith_points);
    policy.cap(raw)
}

fn market_score(input: &ScoringInput, policy: ScoringPolicy) -> f64 {
    let raw = policy.market_cap_points.points(input.market_cap)
        + policy.industry_growth_points.points(input.industry_growth)
        + input.competitive_position * policy.competitive_multiplier
        + (policy.cycle_ceiling - input.economic_cycle) * policy.cycle_multiplier;
    policy.cap(raw)
}

fn compliance_score(input: &ScoringInput, policy: ScoringPolicy) -> f64 {
    [
        input.sec_compliant,
        input.finra_approved,
        input.state_approved,
        input.tax_efficient,
    ]
    .into_iter()
    .map(|flag| flag_points(flag, policy.compliance_points))
    .sum()
}

fn strengths(input: &ScoringInput) -> Vec<Strength> {
    let mut found = Vec::new();
    if input.bible_compliant {
        found.push(Strength::BiblicalCompliance);
    }
    if input.expected_return >= 12.0 {
        found.push(Strength::ExpectedReturns);
    }
    if input.risk_score <= 4.0 {
        found.push(Strength::LowRisk);
    }
    if input.esg_score >= 8.0 {
        found.push(Strength::EsgRating);
    }
    found
}

fn flag_points(flag: bool, points: f64) -> f64 {
    if flag { points } else { 0.0 }
}

fn mean(values: &[f64]) -> EngineResult<f64> {
    if values.is_empty() {
        return Err(EngineError::invalid(
            "historical_performance",
            "at least one historical return is required",
        ));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rejects out-of-domain values and clamps bounded fields into range.
fn normalize(input: &ScoringInput) -> EngineResult<ScoringInput> {
    let mut historical_performance = Vec::with_capacity(input.historical_performance.len());
    for value in &input.historical_performance {
        historical_performance.push(require_finite("historical_performance", *value)?);
    }

    Ok(ScoringInput {
        expected_return: require_finite("expected_return", input.expected_return)?,
        risk_score: clamp_field("risk_score", input.risk_score, 1.0, 10.0)?,
        liquidity_score: clamp_field("liquidity_score", input.liquidity_score, 1.0, 10.0)?,
        historical_performance,
        bible_compliant: input.bible_compliant,
        esg_score: clamp_field("esg_score", input.esg_score, 0.0, 10.0)?,
        community_impact: clamp_field("community_impact", input.community_impact, 0.0, 10.0)?,
        ethical_business: input.ethical_business,
        faith_leadership: input.faith_leadership,
        market_cap: require_non_negative("market_cap", input.market_cap)?,
        industry_growth: require_finite("industry_growth", input.industry_growth)?,
        competitive_position: clamp_field(
            "competitive_position",
            input.competitive_position,
            1.0,
            10.0,
        )?,
        economic_cycle: clamp_field("economic_cycle", input.economic_cycle, 1.0, 10.0)?,
        sec_compliant: input.sec_compliant,
        finra_approved: input.finra_approved,
        state_approved: input.state_approved,
        tax_efficient: input.tax_efficient,
    })
}

fn clamp_field(field: &'static str, value: f64, min: f64, max: f64) -> EngineResult<f64> {
    let value = require_finite(field, value)?;
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field, value, clamped, "clamped scoring input into range");
    }
    Ok(clamped)
}
