mod support;

use faith_client::commands::roi::{self, RoiRunOptions};
use faith_client::engine::roi::RoiOverrides;
use support::scoring_testkit::{assert_close, data_f64, data_str, temp_dir, write_file};

#[test]
fn default_scenario_runs_without_a_source() {
    let result = roi::run(RoiRunOptions::default());
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "roi");
        assert_eq!(envelope.policy_version, "roi/v1");
        assert_eq!(data_str(&envelope, "/source"), "default_scenario");
        assert_eq!(data_str(&envelope, "/package"), "professional");
        assert_eq!(data_str(&envelope, "/package_label"), "Professional Suite");
        assert_close(data_f64(&envelope, "/platform_cost"), 650_000.0);
        assert_close(data_f64(&envelope, "/breakdown/total_benefit"), 12_166_000.0);
        assert_close(data_f64(&envelope, "/roi_percentage"), 11_516_000.0 / 6_500.0);
        assert_close(data_f64(&envelope, "/inputs/member_count"), 500.0);
    }
}

#[test]
fn file_values_are_overlaid_by_explicit_overrides() {
    let Some(dir) = temp_dir() else {
        return;
    };
    let path = write_file(
        dir.path(),
        "church.json",
        r#"{"current_aum": 1500000000, "property_count": 10, "staff_costs": 100000}"#,
    );

    let result = roi::run(RoiRunOptions {
        file: Some(path.display().to_string()),
        overrides: RoiOverrides {
            property_count: Some(0.0),
            ..RoiOverrides::default()
        },
        stdin_override: Some(String::new()),
    });
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(data_str(&envelope, "/source"), "file");
        assert_eq!(data_str(&envelope, "/package"), "enterprise");
        assert_close(data_f64(&envelope, "/inputs/current_aum"), 1_500_000_000.0);
        assert_close(data_f64(&envelope, "/inputs/property_count"), 0.0);
        assert_close(data_f64(&envelope, "/inputs/staff_costs"), 100_000.0);
        assert_close(data_f64(&envelope, "/breakdown/property_fee_retention"), 0.0);
        assert_close(data_f64(&envelope, "/platform_cost"), 1_400_000.0);
    }
}

#[test]
fn all_zero_benefit_is_degenerate() {
    let zero = RoiOverrides {
        current_aum: Some(0.0),
        current_tech_costs: Some(0.0),
        staff_costs: Some(0.0),
        analysis_time_hours: Some(0.0),
        property_count: Some(0.0),
        ..RoiOverrides::default()
    };
    let result = roi::run(RoiRunOptions {
        overrides: zero,
        ..RoiRunOptions::default()
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "degenerate_input");
    }
}

#[test]
fn unknown_document_fields_are_rejected() {
    let result = roi::run(RoiRunOptions {
        file: Some("-".to_string()),
        overrides: RoiOverrides::default(),
        stdin_override: Some(r#"{"currentAUM": 500000000}"#.to_string()),
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "invalid_argument");
        assert!(error.message.contains("currentAUM"));
    }
}

#[test]
fn negative_override_is_invalid_input() {
    let result = roi::run(RoiRunOptions {
        overrides: RoiOverrides {
            staff_costs: Some(-5.0),
            ..RoiOverrides::default()
        },
        ..RoiRunOptions::default()
    });
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "invalid_input");
    }
}
