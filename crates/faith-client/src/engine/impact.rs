use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::error::{EngineResult, require_finite};
use crate::engine::policy::{IMPACT_POLICY_V1, ImpactPolicy};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Principle {
    CareForPoor,
    CreationStewardship,
    SocialJustice,
    CommunityBuilding,
    EconomicEmpowerment,
}

impl Principle {
    pub const ALL: [Self; 5] = [
        Self::CareForPoor,
        Self::CreationStewardship,
        Self::SocialJustice,
        Self::CommunityBuilding,
        Self::EconomicEmpowerment,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CareForPoor => "care_for_poor",
            Self::CreationStewardship => "creation_stewardship",
            Self::SocialJustice => "social_justice",
            Self::CommunityBuilding => "community_building",
            Self::EconomicEmpowerment => "economic_empowerment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CareForPoor => "Care For Poor",
            Self::CreationStewardship => "Creation Stewardship",
            Self::SocialJustice => "Social Justice",
            Self::CommunityBuilding => "Community Building",
            Self::EconomicEmpowerment => "Economic Empowerment",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::CareForPoor => 0.25,
            Self::CreationStewardship | Self::SocialJustice | Self::CommunityBuilding => 0.20,
            Self::EconomicEmpowerment => 0.15,
        }
    }

    pub fn scripture(self) -> &'static str {
        match self {
            Self::CareForPoor => "Proverbs 31:8-9",
            Self::CreationStewardship => "Genesis 1:28",
            Self::SocialJustice => "Micah 6:8",
            Self::CommunityBuilding => "Acts 2:44-47",
            Self::EconomicEmpowerment => "Deuteronomy 15:7-11",
        }
    }
}

/// Principle scores on a 0-100 scale plus the projected IRR in percent.
/// Missing principle scores count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactInput {
    pub care_for_poor: f64,
    pub creation_stewardship: f64,
    pub social_justice: f64,
    pub community_building: f64,
    pub economic_empowerment: f64,
    pub projected_irr: f64,
}

impl ImpactInput {
    pub fn score_for(&self, principle: Principle) -> f64 {
        match principle {
            Principle::CareForPoor => self.care_for_poor,
            Principle::CreationStewardship => self.creation_stewardship,
            Principle::SocialJustice => self.social_justice,
            Principle::CommunityBuilding => self.community_building,
            Principle::EconomicEmpowerment => self.economic_empowerment,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AlignmentLevel {
    High,
    Medium,
    Low,
}

impl AlignmentLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Consider,
    Hold,
    Avoid,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "strong_buy",
            Self::Buy => "buy",
            Self::Consider => "consider",
            Self::Hold => "hold",
            Self::Avoid => "avoid",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY - Excellent Kingdom impact with strong financial returns",
            Self::Buy => "BUY - Good Kingdom impact with solid financial returns",
            Self::Consider => "CONSIDER - Moderate Kingdom impact with acceptable returns",
            Self::Hold => "HOLD - Requires further analysis before recommendation",
            Self::Avoid => "AVOID - Poor Kingdom alignment regardless of financial metrics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipleAlignment {
    pub principle: Principle,
    pub score: f64,
    pub alignment: AlignmentLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactOutput {
    pub kingdom_score: u8,
    pub overall_alignment: AlignmentLevel,
    pub principles: Vec<PrincipleAlignment>,
    pub projected_irr: f64,
    pub recommendation: Recommendation,
}

pub fn analyze_impact(input: &ImpactInput) -> EngineResult<ImpactOutput> {
    analyze_impact_with_policy(input, IMPACT_POLICY_V1)
}

pub fn analyze_impact_with_policy(
    input: &ImpactInput,
    policy: ImpactPolicy,
) -> EngineResult<ImpactOutput> {
    let projected_irr = require_finite("projected_irr", input.projected_irr)?;

    let mut principles = Vec::with_capacity(Principle::ALL.len());
    let mut weighted_total = 0.0;
    for principle in Principle::ALL {
        let score = require_finite(principle.key(), input.score_for(principle))?.clamp(0.0, 100.0);
        weighted_total += score * principle.weight();
        principles.push(PrincipleAlignment {
            principle,
            score,
            alignment: alignment_for(score, policy),
        });
    }

    let kingdom_score = truncate_score(weighted_total);
    let overall_alignment = if f64::from(kingdom_score) >= policy.high_alignment {
        AlignmentLevel::High
    } else {
        AlignmentLevel::Medium
    };
    let recommendation = recommend(kingdom_score, projected_irr, policy);

    debug!(
        kingdom_score,
        projected_irr,
        recommendation = recommendation.as_str(),
        "analyzed kingdom impact"
    );

    Ok(ImpactOutput {
        kingdom_score,
        overall_alignment,
        principles,
        projected_irr,
        recommendation,
    })
}

fn alignment_for(score: f64, policy: ImpactPolicy) -> AlignmentLevel {
    if score >= policy.high_alignment {
        AlignmentLevel::High
    } else if score >= policy.medium_alignment {
        AlignmentLevel::Medium
    } else {
        AlignmentLevel::Low
    }
}

fn recommend(kingdom_score: u8, projected_irr: f64, policy: ImpactPolicy) -> Recommendation {
    let score = f64::from(kingdom_score);
    let meets = |(min_score, min_irr): (f64, f64)| score >= min_score && projected_irr >= min_irr;

    if meets(policy.strong_buy) {
        Recommendation::StrongBuy
    } else if meets(policy.buy) {
        Recommendation::Buy
    } else if meets(policy.consider) {
        Recommendation::Consider
    } else if score < policy.avoid_below {
        Recommendation::Avoid
    } else {
        Recommendation::Hold
    }
}

fn truncate_score(total: f64) -> u8 {
    // Inputs are clamped and weights sum to one, so the total already sits in 0..=100.
    total.trunc().clamp(0.0, 100.0) as u8
}
