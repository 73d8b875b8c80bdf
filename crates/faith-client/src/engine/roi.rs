use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::error::{EngineError, EngineResult, require_non_negative};
use crate::engine::policy::{ROI_POLICY_V1, RoiPolicy};

/// Organisation profile fed to the ROI calculator. All values are
/// non-negative; `member_count` and `management_fees` are carried for
/// reporting and do not enter the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoiInput {
    pub current_aum: f64,
    pub member_count: f64,
    pub current_tech_costs: f64,
    pub staff_costs: f64,
    pub analysis_time_hours: f64,
    pub investment_manager_salary: f64,
    pub portfolio_performance: f64,
    pub property_count: f64,
    pub management_fees: f64,
}

impl RoiInput {
    /// The calculator's pre-filled scenario: a $500M organisation.
    pub fn default_scenario() -> Self {
        Self {
            current_aum: 500_000_000.0,
            member_count: 500.0,
            current_tech_costs: 200_000.0,
            staff_costs: 300_000.0,
            analysis_time_hours: 20.0,
            investment_manager_salary: 150_000.0,
            portfolio_performance: 8.5,
            property_count: 50.0,
            management_fees: 150_000.0,
        }
    }

    pub fn overlay(mut self, overrides: &RoiOverrides) -> Self {
        let pairs = [
            (&mut self.current_aum, overrides.current_aum),
            (&mut self.member_count, overrides.member_count),
            (&mut self.current_tech_costs, overrides.current_tech_costs),
            (&mut self.staff_costs, overrides.staff_costs),
            (&mut self.analysis_time_hours, overrides.analysis_time_hours),
            (
                &mut self.investment_manager_salary,
                overrides.investment_manager_salary,
            ),
            (
                &mut self.portfolio_performance,
                overrides.portfolio_performance,
            ),
            (&mut self.property_count, overrides.property_count),
            (&mut self.management_fees, overrides.management_fees),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
        self
    }

    fn validated(&self) -> EngineResult<Self> {
        Ok(Self {
            current_aum: require_non_negative("current_aum", self.current_aum)?,
            member_count: require_non_negative("member_count", self.member_count)?,
            current_tech_costs: require_non_negative("current_tech_costs", self.current_tech_costs)?,
            staff_costs: require_non_negative("staff_costs", self.staff_costs)?,
            analysis_time_hours: require_non_negative(
                "analysis_time_hours",
                self.analysis_time_hours,
            )?,
            investment_manager_salary: require_non_negative(
                "investment_manager_salary",
                self.investment_manager_salary,
            )?,
            portfolio_performance: require_non_negative(
                "portfolio_performance",
                self.portfolio_performance,
            )?,
            property_count: require_non_negative("property_count", self.property_count)?,
            management_fees: require_non_negative("management_fees", self.management_fees)?,
        })
    }
}

/// Partial ROI input; set fields replace the matching field of a base input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoiOverrides {
    pub current_aum: Option<f64>,
    pub member_count: Option<f64>,
    pub current_tech_costs: Option<f64>,
    pub staff_costs: Option<f64>,
    pub analysis_time_hours: Option<f64>,
    pub investment_manager_salary: Option<f64>,
    pub portfolio_performance: Option<f64>,
    pub property_count: Option<f64>,
    pub management_fees: Option<f64>,
}

/// Pricing package a platform cost corresponds to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlatformPackage {
    Growth,
    Professional,
    Enterprise,
}

impl PlatformPackage {
    pub fn for_aum(aum: f64, policy: RoiPolicy) -> Self {
        if aum >= policy.enterprise_min_aum {
            Self::Enterprise
        } else if aum >= policy.professional_min_aum {
            Self::Professional
        } else {
            Self::Growth
        }
    }

    pub fn annual_cost(self) -> f64 {
        match self {
            Self::Growth => 300_000.0,
            Self::Professional => 650_000.0,
            Self::Enterprise => 1_400_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Professional => "Professional Suite",
            Self::Enterprise => "Enterprise Complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiOutput {
    pub performance_gains: f64,
    pub time_savings: f64,
    pub tech_savings: f64,
    pub efficiency_gains: f64,
    pub property_fee_retention: f64,
    pub annual_savings: f64,
    pub total_benefit: f64,
    pub package: PlatformPackage,
    pub platform_cost: f64,
    pub net_roi: f64,
    pub roi_percentage: f64,
    pub payback_months: f64,
    pub three_year_value: f64,
}

pub fn compute_roi(input: &RoiInput) -> EngineResult<RoiOutput> {
    compute_roi_with_policy(input, ROI_POLICY_V1)
}

pub fn compute_roi_with_policy(input: &RoiInput, policy: RoiPolicy) -> EngineResult<RoiOutput> {
    let input = input.validated()?;

    let performance_gains =
        input.current_aum * (input.portfolio_performance / 100.0) * policy.performance_boost;
    let hourly_rate = input.investment_manager_salary / policy.annual_work_hours;
    let time_savings = input.analysis_time_hours
        * policy.weeks_per_year
        * hourly_rate
        * policy.time_savings_multiplier;
    let tech_savings = input.current_tech_costs * policy.tech_savings_ratio;
    let efficiency_gains = input.staff_costs * policy.efficiency_ratio;
    let property_fee_retention = input.property_count * policy.fee_retention_per_property;

    let annual_savings = tech_savings + time_savings + efficiency_gains + property_fee_retention;
    let total_benefit = annual_savings + performance_gains;
    if total_benefit == 0.0 {
        return Err(EngineError::degenerate(
            "payback_months",
            "total annual benefit is zero, so the platform never pays back",
        ));
    }

    let package = PlatformPackage::for_aum(input.current_aum, policy);
    let platform_cost = package.annual_cost();
    let net_roi = total_benefit - platform_cost;
    let roi_percentage = (net_roi / platform_cost) * 100.0;
    let payback_months = platform_cost / (total_benefit / policy.months_per_year);
    let three_year_value = (total_benefit * policy.projection_years) - platform_cost;

    let metrics = [
        ("performance_gains", performance_gains),
        ("time_savings", time_savings),
        ("annual_savings", annual_savings),
        ("total_benefit", total_benefit),
        ("net_roi", net_roi),
        ("roi_percentage", roi_percentage),
        ("payback_months", payback_months),
        ("three_year_value", three_year_value),
    ];
    if let Some(&(metric, _)) = metrics.iter().find(|(_, value)| !value.is_finite()) {
        return Err(EngineError::degenerate(
            metric,
            "inputs are outside the range where the result is a finite number",
        ));
    }

    debug!(
        total_benefit,
        platform_cost,
        roi_percentage,
        payback_months,
        package = package.as_str(),
        "computed roi"
    );

    Ok(RoiOutput {
        performance_gains,
        time_savings,
        tech_savings,
        efficiency_gains,
        property_fee_retention,
        annual_savings,
        total_benefit,
        package,
        platform_cost,
        net_roi,
        roi_percentage,
        payback_months,
        three_year_value,
    })
}

#[cfg(test)]
mod tests {
    use crate::engine::error::EngineError;
    use crate::engine::policy::ROI_POLICY_V1;

    use super::{PlatformPackage, RoiInput, RoiOverrides, compute_roi};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs().max(1.0) * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn zeroed() -> RoiInput {
        RoiInput {
            current_aum: 0.0,
            member_count: 0.0,
            current_tech_costs: 0.0,
            staff_costs: 0.0,
            analysis_time_hours: 0.0,
            investment_manager_salary: 0.0,
            portfolio_performance: 0.0,
            property_count: 0.0,
            management_fees: 0.0,
        }
    }

    #[test]
    fn default_scenario_matches_calculator_breakdown() {
        let result = compute_roi(&RoiInput::default_scenario());
        assert!(result.is_ok());
        if let Ok(output) = result {
            assert_eq!(output.package, PlatformPackage::Professional);
            assert_close(output.platform_cost, 650_000.0);
            assert_close(output.tech_savings, 120_000.0);
            assert_close(output.efficiency_gains, 120_000.0);
            assert_close(output.property_fee_retention, 1_250_000.0);
            assert_close(output.time_savings, 51_000.0);
            assert_close(output.performance_gains, 10_625_000.0);
            assert_close(output.annual_savings, 1_541_000.0);
            assert_close(output.total_benefit, 12_166_000.0);
            assert_close(output.net_roi, 11_516_000.0);
            assert_close(output.roi_percentage, 1_771.692_307_692_307_6);
            assert_close(output.payback_months, 650_000.0 / (12_166_000.0 / 12.0));
            assert_close(output.three_year_value, 35_848_000.0);
        }
    }

    #[test]
    fn platform_cost_steps_on_aum() {
        let cases = [
            (0.0, PlatformPackage::Growth, 300_000.0),
            (249_999_999.0, PlatformPackage::Growth, 300_000.0),
            (250_000_000.0, PlatformPackage::Professional, 650_000.0),
            (999_999_999.0, PlatformPackage::Professional, 650_000.0),
            (1_000_000_000.0, PlatformPackage::Enterprise, 1_400_000.0),
        ];
        for (aum, package, cost) in cases {
            let mut input = RoiInput::default_scenario();
            input.current_aum = aum;
            let result = compute_roi(&input);
            assert!(result.is_ok());
            if let Ok(output) = result {
                assert_eq!(output.package, package, "aum {aum}");
                assert_close(output.platform_cost, cost);
            }
            assert_eq!(PlatformPackage::for_aum(aum, ROI_POLICY_V1), package);
        }
    }

    #[test]
    fn total_benefit_is_linear_in_cost_and_property_inputs() {
        type Set = fn(&mut RoiInput, f64);
        let fields: [(&str, Set); 3] = [
            ("current_tech_costs", |input, value| {
                input.current_tech_costs = value;
            }),
            ("staff_costs", |input, value| input.staff_costs = value),
            ("property_count", |input, value| input.property_count = value),
        ];

        for (name, set) in fields {
            let totals = [0.0, 1_000.0, 2_000.0, 4_000.0].map(|value| {
                let mut input = RoiInput::default_scenario();
                set(&mut input, value);
                compute_roi(&input).map(|output| output.total_benefit)
            });
            if let [Ok(t0), Ok(t1), Ok(t2), Ok(t4)] = totals {
                let slope = (t1 - t0) / 1_000.0;
                assert!(slope > 0.0, "{name} slope must be positive");
                assert_close(t2 - t0, slope * 2_000.0);
                assert_close(t4 - t0, slope * 4_000.0);
            } else {
                panic!("{name}: roi computation failed");
            }
        }
    }

    #[test]
    fn zero_total_benefit_is_degenerate() {
        let result = compute_roi(&zeroed());
        assert!(matches!(
            result,
            Err(EngineError::DegenerateInput {
                metric: "payback_months",
                ..
            })
        ));
    }

    #[test]
    fn subnormal_total_benefit_is_degenerate() {
        let mut input = zeroed();
        input.staff_costs = 1e-320;
        let result = compute_roi(&input);
        assert!(matches!(
            result,
            Err(EngineError::DegenerateInput {
                metric: "payback_months",
                ..
            })
        ));
    }

    #[test]
    fn overflowing_benefit_is_degenerate() {
        let mut input = RoiInput::default_scenario();
        input.current_aum = 1e308;
        input.portfolio_performance = 1_000.0;
        let result = compute_roi(&input);
        assert!(matches!(
            result,
            Err(EngineError::DegenerateInput {
                metric: "performance_gains",
                ..
            })
        ));
    }

    #[test]
    fn negative_and_non_finite_inputs_are_invalid() {
        let mut input = RoiInput::default_scenario();
        input.staff_costs = -1.0;
        assert!(matches!(
            compute_roi(&input),
            Err(EngineError::InvalidInput {
                field: "staff_costs",
                ..
            })
        ));

        let mut input = RoiInput::default_scenario();
        input.current_aum = f64::INFINITY;
        assert!(matches!(
            compute_roi(&input),
            Err(EngineError::InvalidInput {
                field: "current_aum",
                ..
            })
        ));
    }

    #[test]
    fn unused_fields_do_not_move_the_result() {
        let base = compute_roi(&RoiInput::default_scenario());
        let mut input = RoiInput::default_scenario();
        input.member_count = 9_000.0;
        input.management_fees = 1.0;
        let changed = compute_roi(&input);
        assert!(base.is_ok());
        if let (Ok(left), Ok(right)) = (base, changed) {
            assert_eq!(left, right);
        }
    }

    #[test]
    fn overlay_replaces_only_set_fields() {
        let overrides = RoiOverrides {
            current_aum: Some(2_000_000_000.0),
            property_count: Some(0.0),
            ..RoiOverrides::default()
        };
        let merged = RoiInput::default_scenario().overlay(&overrides);
        assert_eq!(merged.current_aum, 2_000_000_000.0);
        assert_eq!(merged.property_count, 0.0);
        assert_eq!(merged.staff_costs, 300_000.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let input = RoiInput::default_scenario();
        let first = compute_roi(&input);
        let second = compute_roi(&input);
        assert!(first.is_ok());
        if let (Ok(left), Ok(right)) = (first, second) {
            assert_eq!(left.roi_percentage.to_bits(), right.roi_percentage.to_bits());
            assert_eq!(left, right);
        }
    }
}
