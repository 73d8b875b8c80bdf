use crate::engine::types::{AssetClass, InvestmentProfile, ScoringInput};

/// Investments bundled with the analyzer for demos and smoke checks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SampleInvestment {
    KingdomCommunityReit,
    TechGrowthInnovationFund,
    FaithBasedMunicipalBonds,
}

impl SampleInvestment {
    pub const ALL: [Self; 3] = [
        Self::KingdomCommunityReit,
        Self::TechGrowthInnovationFund,
        Self::FaithBasedMunicipalBonds,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::KingdomCommunityReit => "faith-reit-1",
            Self::TechGrowthInnovationFund => "tech-growth-2",
            Self::FaithBasedMunicipalBonds => "stable-bonds-3",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sample| sample.id() == id)
    }

    pub fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|sample| sample.id()).collect()
    }

    pub fn profile(self) -> InvestmentProfile {
        match self {
            Self::KingdomCommunityReit => InvestmentProfile {
                id: self.id().to_string(),
                name: "Kingdom Community REIT".to_string(),
                asset_class: AssetClass::RealEstate,
                minimum_investment: 50_000.0,
                scoring: ScoringInput {
                    expected_return: 14.2,
                    risk_score: 3.0,
                    liquidity_score: 7.0,
                    historical_performance: vec![12.5, 13.8, 15.2, 14.1, 13.9],
                    bible_compliant: true,
                    esg_score: 9.0,
                    community_impact: 9.0,
                    ethical_business: true,
                    faith_leadership: true,
                    market_cap: 2_500_000_000.0,
                    industry_growth: 8.5,
                    competitive_position: 8.0,
                    economic_cycle: 4.0,
                    sec_compliant: true,
                    finra_approved: true,
                    state_approved: true,
                    tax_efficient: true,
                },
            },
            Self::TechGrowthInnovationFund => InvestmentProfile {
                id: self.id().to_string(),
                name: "TechGrowth Innovation Fund".to_string(),
                asset_class: AssetClass::Stocks,
                minimum_investment: 25_000.0,
                scoring: ScoringInput {
                    expected_return: 18.5,
                    risk_score: 7.0,
                    liquidity_score: 9.0,
                    historical_performance: vec![22.1, 15.3, 19.8, 16.7, 20.2],
                    bible_compliant: false,
                    esg_score: 6.0,
                    community_impact: 5.0,
                    ethical_business: true,
                    faith_leadership: false,
                    market_cap: 15_000_000_000.0,
                    industry_growth: 12.3,
                    competitive_position: 9.0,
                    economic_cycle: 8.0,
                    sec_compliant: true,
                    finra_approved: true,
                    state_approved: true,
                    tax_efficient: false,
                },
            },
            Self::FaithBasedMunicipalBonds => InvestmentProfile {
                id: self.id().to_string(),
                name: "Faith-Based Municipal Bonds".to_string(),
                asset_class: AssetClass::Bonds,
                minimum_investment: 10_000.0,
                scoring: ScoringInput {
                    expected_return: 6.8,
                    risk_score: 2.0,
                    liquidity_score: 5.0,
                    historical_performance: vec![6.2, 6.5, 7.1, 6.9, 6.8],
                    bible_compliant: true,
                    esg_score: 8.0,
                    community_impact: 8.0,
                    ethical_business: true,
                    faith_leadership: true,
                    market_cap: 500_000_000.0,
                    industry_growth: 3.2,
                    competitive_position: 6.0,
                    economic_cycle: 2.0,
                    sec_compliant: true,
                    finra_approved: true,
                    state_approved: true,
                    tax_efficient: true,
                },
            },
        }
    }
}
