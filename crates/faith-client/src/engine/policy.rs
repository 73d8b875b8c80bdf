/// Threshold-table identifiers emitted alongside every result so a change to
/// any constant below shows up as a version bump in output diffs.
pub const SCORING_POLICY_VERSION: &str = "scoring/v1";
pub const ROI_POLICY_VERSION: &str = "roi/v1";
pub const IMPACT_POLICY_VERSION: &str = "impact/v1";

/// Descending `(threshold, points)` steps; the first threshold the value meets
/// wins, otherwise `floor` applies. Comparisons are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<const N: usize> {
    pub steps: [(f64, f64); N],
    pub floor: f64,
}

impl<const N: usize> Ladder<N> {
    pub fn points(&self, value: f64) -> f64 {
        self.steps
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map_or(self.floor, |&(_, points)| points)
    }
}

/// v1 investment scoring policy.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    pub financial_weight: f64,
    pub kingdom_weight: f64,
    pub market_weight: f64,
    pub compliance_weight: f64,
    pub score_cap: f64,

    pub expected_return_points: Ladder<4>,
    pub risk_ceiling: f64,
    pub risk_multiplier: f64,
    pub liquidity_multiplier: f64,
    pub history_points: Ladder<3>,

    pub bible_points: f64,
    pub esg_multiplier: f64,
    pub community_multiplier: f64,
    pub ethical_points: f64,
    pub faith_points: f64,

    pub market_cap_points: Ladder<3>,
    pub industry_growth_points: Ladder<3>,
    pub competitive_multiplier: f64,
    pub cycle_ceiling: f64,
    pub cycle_multiplier: f64,

    pub compliance_points: f64,
}

impl ScoringPolicy {
    pub fn composite(self, financial: f64, kingdom: f64, market: f64, compliance: f64) -> f64 {
        (self.financial_weight * financial)
            + (self.kingdom_weight * kingdom)
            + (self.market_weight * market)
            + (self.compliance_weight * compliance)
    }

    pub fn cap(self, raw: f64) -> f64 {
        raw.clamp(0.0, self.score_cap)
    }
}

pub const SCORING_POLICY_V1: ScoringPolicy = ScoringPolicy {
    financial_weight: 0.35,
    kingdom_weight: 0.30,
    market_weight: 0.20,
    compliance_weight: 0.15,
    score_cap: 100.0,

    expected_return_points: Ladder {
        steps: [(15.0, 30.0), (12.0, 25.0), (8.0, 20.0), (5.0, 15.0)],
        floor: 5.0,
    },
    risk_ceiling: 11.0,
    risk_multiplier: 2.5,
    liquidity_multiplier: 2.0,
    history_points: Ladder {
        steps: [(12.0, 25.0), (8.0, 20.0), (5.0, 15.0)],
        floor: 5.0,
    },

    bible_points: 30.0,
    esg_multiplier: 2.5,
    community_multiplier: 2.5,
    ethical_points: 10.0,
    faith_points: 10.0,

    market_cap_points: Ladder {
        steps: [(10_000_000_000.0, 25.0), (2_000_000_000.0, 20.0), (500_000_000.0, 15.0)],
        floor: 10.0,
    },
    industry_growth_points: Ladder {
        steps: [(10.0, 30.0), (5.0, 25.0), (2.0, 20.0)],
        floor: 10.0,
    },
    competitive_multiplier: 2.5,
    cycle_ceiling: 11.0,
    cycle_multiplier: 2.0,

    compliance_points: 25.0,
};

/// v1 ROI assumptions. Every ratio here is a fixed marketing assumption, not
/// a measured quantity.
#[derive(Debug, Clone, Copy)]
pub struct RoiPolicy {
    pub performance_boost: f64,
    pub weeks_per_year: f64,
    pub annual_work_hours: f64,
    pub time_savings_multiplier: f64,
    pub tech_savings_ratio: f64,
    pub efficiency_ratio: f64,
    pub fee_retention_per_property: f64,
    pub enterprise_min_aum: f64,
    pub professional_min_aum: f64,
    pub months_per_year: f64,
    pub projection_years: f64,
}

pub const ROI_POLICY_V1: RoiPolicy = RoiPolicy {
    performance_boost: 0.25,
    weeks_per_year: 52.0,
    annual_work_hours: 2080.0,
    time_savings_multiplier: 0.68,
    tech_savings_ratio: 0.60,
    efficiency_ratio: 0.40,
    fee_retention_per_property: 25_000.0,
    enterprise_min_aum: 1_000_000_000.0,
    professional_min_aum: 250_000_000.0,
    months_per_year: 12.0,
    projection_years: 3.0,
};

/// v1 kingdom impact recommendation ladder.
#[derive(Debug, Clone, Copy)]
pub struct ImpactPolicy {
    pub strong_buy: (f64, f64),
    pub buy: (f64, f64),
    pub consider: (f64, f64),
    pub avoid_below: f64,
    pub high_alignment: f64,
    pub medium_alignment: f64,
}

pub const IMPACT_POLICY_V1: ImpactPolicy = ImpactPolicy {
    strong_buy: (90.0, 10.0),
    buy: (80.0, 8.0),
    consider: (70.0, 6.0),
    avoid_below: 50.0,
    high_alignment: 80.0,
    medium_alignment: 60.0,
};
