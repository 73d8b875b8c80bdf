use serde::{Deserialize, Serialize};

/// Raw classifier input. Bounded fields are clamped by the classifier, so a
/// value parsed from a file only has to be a finite number to be accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringInput {
    pub expected_return: f64,
    pub risk_score: f64,
    pub liquidity_score: f64,
    pub historical_performance: Vec<f64>,
    pub bible_compliant: bool,
    pub esg_score: f64,
    pub community_impact: f64,
    pub ethical_business: bool,
    pub faith_leadership: bool,
    pub market_cap: f64,
    pub industry_growth: f64,
    pub competitive_position: f64,
    pub economic_cycle: f64,
    pub sec_compliant: bool,
    pub finra_approved: bool,
    pub state_approved: bool,
    pub tax_efficient: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    RealEstate,
    Stocks,
    Bonds,
    PrivateEquity,
    Commodities,
}

impl AssetClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RealEstate => "real_estate",
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::PrivateEquity => "private_equity",
            Self::Commodities => "commodities",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvestmentProfile {
    pub id: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub minimum_investment: f64,
    pub scoring: ScoringInput,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Tier {
    Premier,
    Quality,
    Acceptable,
    Rejected,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Premier
        } else if score >= 70.0 {
            Self::Quality
        } else if score >= 55.0 {
            Self::Acceptable
        } else {
            Self::Rejected
        }
    }

    /// Ordinal rank; `None` for rejected investments.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Premier => Some(1),
            Self::Quality => Some(2),
            Self::Acceptable => Some(3),
            Self::Rejected => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Premier => "Premier",
            Self::Quality => "Quality",
            Self::Acceptable => "Acceptable",
            Self::Rejected => "Rejected",
        }
    }

    pub fn badge(self) -> String {
        match self.rank() {
            Some(rank) => format!("Tier {rank} - {}", self.label()),
            None => format!("Tier R - {}", self.label()),
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Premier => &[
                "Excellent investment opportunity - recommend for Cornerstone and Foundation members",
                "Consider increasing allocation percentage in member portfolios",
            ],
            Self::Quality => &[
                "Good investment with room for improvement",
                "Suitable for Foundation members, consider for Cornerstone with additional due diligence",
            ],
            Self::Acceptable => &[
                "Acceptable investment with limitations",
                "Suitable primarily for Pillar members with appropriate risk tolerance",
            ],
            Self::Rejected => &["Does not meet platform criteria - exclude from member portfolios"],
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Grade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    D,
}

impl Grade {
    const CUTOFFS: [(f64, Self); 8] = [
        (90.0, Self::APlus),
        (85.0, Self::A),
        (80.0, Self::AMinus),
        (75.0, Self::BPlus),
        (70.0, Self::B),
        (65.0, Self::BMinus),
        (60.0, Self::CPlus),
        (55.0, Self::C),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::CUTOFFS
            .iter()
            .find(|(cutoff, _)| score >= *cutoff)
            .map_or(Self::D, |&(_, grade)| grade)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Strength {
    BiblicalCompliance,
    ExpectedReturns,
    LowRisk,
    EsgRating,
}

impl Strength {
    pub fn description(self) -> &'static str {
        match self {
            Self::BiblicalCompliance => "Strong biblical compliance",
            Self::ExpectedReturns => "Excellent expected returns",
            Self::LowRisk => "Low risk profile",
            Self::EsgRating => "Outstanding ESG rating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub financial: f64,
    pub kingdom: f64,
    pub market: f64,
    pub compliance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutput {
    pub sub_scores: SubScores,
    /// Weighted composite, always within `[0, 100]`.
    pub composite: f64,
    pub tier: Tier,
    pub grade: Grade,
    pub strengths: Vec<Strength>,
}

impl ScoringOutput {
    pub fn sub_grades(&self) -> [(&'static str, Grade); 4] {
        [
            ("financial", Grade::from_score(self.sub_scores.financial)),
            ("kingdom", Grade::from_score(self.sub_scores.kingdom)),
            ("market", Grade::from_score(self.sub_scores.market)),
            ("compliance", Grade::from_score(self.sub_scores.compliance)),
        ]
    }
}
