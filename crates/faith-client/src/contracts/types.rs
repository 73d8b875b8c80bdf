use serde::Serialize;

use crate::engine::impact::ImpactOutput;
use crate::engine::roi::{RoiInput, RoiOutput};
use crate::engine::types::{InvestmentProfile, ScoringOutput};

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentSummary {
    pub id: String,
    pub name: String,
    pub asset_class: String,
    pub minimum_investment: f64,
}

impl From<&InvestmentProfile> for InvestmentSummary {
    fn from(profile: &InvestmentProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            asset_class: profile.asset_class.as_str().to_string(),
            minimum_investment: profile.minimum_investment,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubScoreRow {
    pub name: String,
    pub score: f64,
    pub grade: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyData {
    /// `file`, `stdin`, or `sample`.
    pub source: String,
    pub source_ref: Option<String>,
    pub investment: Option<InvestmentSummary>,
    pub sub_scores: Vec<SubScoreRow>,
    #[serde(rename = "final")]
    pub final_score: f64,
    /// `"1"`, `"2"`, `"3"`, or `"R"`.
    pub tier: String,
    pub tier_label: String,
    pub tier_badge: String,
    pub grade: String,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ClassifyData {
    pub fn from_output(
        output: &ScoringOutput,
        source: &str,
        source_ref: Option<String>,
        investment: Option<InvestmentSummary>,
    ) -> Self {
        let scores = [
            output.sub_scores.financial,
            output.sub_scores.kingdom,
            output.sub_scores.market,
            output.sub_scores.compliance,
        ];
        let sub_scores = output
            .sub_grades()
            .into_iter()
            .zip(scores)
            .map(|((name, grade), score)| SubScoreRow {
                name: name.to_string(),
                score,
                grade: grade.as_str().to_string(),
            })
            .collect();

        Self {
            source: source.to_string(),
            source_ref,
            investment,
            sub_scores,
            final_score: output.composite,
            tier: tier_code(output),
            tier_label: output.tier.label().to_string(),
            tier_badge: output.tier.badge(),
            grade: output.grade.as_str().to_string(),
            strengths: output
                .strengths
                .iter()
                .map(|strength| strength.description().to_string())
                .collect(),
            recommendations: output
                .tier
                .recommendations()
                .iter()
                .map(|line| (*line).to_string())
                .collect(),
        }
    }
}

fn tier_code(output: &ScoringOutput) -> String {
    output
        .tier
        .rank()
        .map_or_else(|| "R".to_string(), |rank| rank.to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiBreakdown {
    pub performance_gains: f64,
    pub time_savings: f64,
    pub tech_savings: f64,
    pub efficiency_gains: f64,
    pub property_fee_retention: f64,
    pub annual_savings: f64,
    pub total_benefit: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiData {
    /// `default_scenario`, `file`, or `stdin`.
    pub source: String,
    pub source_ref: Option<String>,
    pub inputs: RoiInput,
    pub breakdown: RoiBreakdown,
    pub package: String,
    pub package_label: String,
    pub platform_cost: f64,
    pub net_roi: f64,
    pub roi_percentage: f64,
    pub payback_months: f64,
    pub three_year_value: f64,
}

impl RoiData {
    pub fn from_output(
        output: &RoiOutput,
        inputs: RoiInput,
        source: &str,
        source_ref: Option<String>,
    ) -> Self {
        Self {
            source: source.to_string(),
            source_ref,
            inputs,
            breakdown: RoiBreakdown {
                performance_gains: output.performance_gains,
                time_savings: output.time_savings,
                tech_savings: output.tech_savings,
                efficiency_gains: output.efficiency_gains,
                property_fee_retention: output.property_fee_retention,
                annual_savings: output.annual_savings,
                total_benefit: output.total_benefit,
            },
            package: output.package.as_str().to_string(),
            package_label: output.package.label().to_string(),
            platform_cost: output.platform_cost,
            net_roi: output.net_roi,
            roi_percentage: output.roi_percentage,
            payback_months: output.payback_months,
            three_year_value: output.three_year_value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrincipleRow {
    pub principle: String,
    pub label: String,
    pub score: f64,
    pub weight: f64,
    pub scripture: String,
    pub alignment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactData {
    pub source: String,
    pub source_ref: Option<String>,
    pub kingdom_score: u8,
    pub overall_alignment: String,
    pub projected_irr: f64,
    pub recommendation: String,
    pub recommendation_text: String,
    pub principles: Vec<PrincipleRow>,
}

impl ImpactData {
    pub fn from_output(output: &ImpactOutput, source: &str, source_ref: Option<String>) -> Self {
        Self {
            source: source.to_string(),
            source_ref,
            kingdom_score: output.kingdom_score,
            overall_alignment: output.overall_alignment.as_str().to_string(),
            projected_irr: output.projected_irr,
            recommendation: output.recommendation.as_str().to_string(),
            recommendation_text: output.recommendation.headline().to_string(),
            principles: output
                .principles
                .iter()
                .map(|row| PrincipleRow {
                    principle: row.principle.key().to_string(),
                    label: row.principle.label().to_string(),
                    score: row.score,
                    weight: row.principle.weight(),
                    scripture: row.principle.scripture().to_string(),
                    alignment: row.alignment.as_str().to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub id: String,
    pub name: String,
    pub asset_class: String,
    pub minimum_investment: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
    pub tier: String,
    pub tier_label: String,
    pub grade: String,
}

impl SampleRow {
    pub fn from_profile(profile: &InvestmentProfile, output: &ScoringOutput) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            asset_class: profile.asset_class.as_str().to_string(),
            minimum_investment: profile.minimum_investment,
            final_score: output.composite,
            tier: tier_code(output),
            tier_label: output.tier.label().to_string(),
            grade: output.grade.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplesData {
    pub rows: Vec<SampleRow>,
}
