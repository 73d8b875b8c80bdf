use std::io;

use serde_json::Value;

use super::classify_text::source_line;
use super::format::{self, number_field, text_field};

pub fn render_roi(data: &Value) -> io::Result<String> {
    let breakdown = data
        .get("breakdown")
        .filter(|value| value.is_object())
        .ok_or_else(|| io::Error::other("roi output requires breakdown"))?;
    let inputs = data.get("inputs").cloned().unwrap_or(Value::Null);

    let mut lines = vec![
        format!(
            "Platform ROI: {} package at {} / year",
            text_field(data, "package_label"),
            format::currency(number_field(data, "platform_cost"))
        ),
        String::new(),
        "Annual benefit:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            (
                "Performance gains:",
                format::currency(number_field(breakdown, "performance_gains")),
            ),
            (
                "Time savings:",
                format::currency(number_field(breakdown, "time_savings")),
            ),
            (
                "Technology savings:",
                format::currency(number_field(breakdown, "tech_savings")),
            ),
            (
                "Efficiency gains:",
                format::currency(number_field(breakdown, "efficiency_gains")),
            ),
            (
                "Property fee retention:",
                format::currency(number_field(breakdown, "property_fee_retention")),
            ),
            (
                "Total:",
                format::currency(number_field(breakdown, "total_benefit")),
            ),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Return:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Net ROI:", format::currency(number_field(data, "net_roi"))),
            (
                "ROI:",
                format::percent(number_field(data, "roi_percentage")),
            ),
            (
                "Payback:",
                format::months(number_field(data, "payback_months")),
            ),
            (
                "Three-year value:",
                format::currency(number_field(data, "three_year_value")),
            ),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Inputs:".to_string());
    lines.extend(format::key_value_rows(
        &[
            (
                "Assets under management:",
                format::currency(number_field(&inputs, "current_aum")),
            ),
            (
                "Member churches:",
                format!("{}", number_field(&inputs, "member_count")),
            ),
            (
                "Portfolio performance:",
                format::percent(number_field(&inputs, "portfolio_performance")),
            ),
            (
                "Technology costs:",
                format::currency(number_field(&inputs, "current_tech_costs")),
            ),
            (
                "Staff costs:",
                format::currency(number_field(&inputs, "staff_costs")),
            ),
            (
                "Manager salary:",
                format::currency(number_field(&inputs, "investment_manager_salary")),
            ),
            (
                "Analysis hours / week:",
                format!("{}", number_field(&inputs, "analysis_time_hours")),
            ),
            (
                "Properties:",
                format!("{}", number_field(&inputs, "property_count")),
            ),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push(source_line(data));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_roi;

    #[test]
    fn renders_breakdown_and_return_blocks() {
        let data = json!({
            "source": "default_scenario",
            "source_ref": null,
            "inputs": {
                "current_aum": 500000000.0,
                "member_count": 500.0,
                "portfolio_performance": 8.5,
                "current_tech_costs": 200000.0,
                "staff_costs": 300000.0,
                "management_fees": 150000.0,
                "investment_manager_salary": 150000.0,
                "analysis_time_hours": 20.0,
                "property_count": 50.0
            },
            "breakdown": {
                "performance_gains": 10625000.0,
                "time_savings": 51000.0,
                "tech_savings": 120000.0,
                "efficiency_gains": 120000.0,
                "property_fee_retention": 1250000.0,
                "annual_savings": 1541000.0,
                "total_benefit": 12166000.0
            },
            "package": "professional",
            "package_label": "Professional Suite",
            "platform_cost": 650000.0,
            "net_roi": 11516000.0,
            "roi_percentage": 1771.6923076923076,
            "payback_months": 0.6411310208778563,
            "three_year_value": 35848000.0
        });

        let rendered = render_roi(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Platform ROI: Professional Suite package at $650,000 / year"));
            assert!(text.contains("$12,166,000"));
            assert!(text.contains("1771.7%"));
            assert!(text.contains("0.6 months"));
            assert!(text.contains("$35,848,000"));
            assert!(text.contains("Member churches:"));
            assert!(text.ends_with("Source: default scenario"));
        }
    }

    #[test]
    fn missing_breakdown_is_an_error() {
        assert!(render_roi(&json!({"package": "growth"})).is_err());
    }
}
