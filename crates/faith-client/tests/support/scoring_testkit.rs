#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use faith_client::SuccessEnvelope;
use serde_json::Value;
use tempfile::TempDir;

pub const REIT_SCORING: &str = r#"{
  "expected_return": 14.2,
  "risk_score": 3,
  "liquidity_score": 7,
  "historical_performance": [12.5, 13.8, 15.2, 14.1, 13.9],
  "bible_compliant": true,
  "esg_score": 9,
  "community_impact": 9,
  "ethical_business": true,
  "faith_leadership": true,
  "market_cap": 2500000000,
  "industry_growth": 8.5,
  "competitive_position": 8,
  "economic_cycle": 4,
  "sec_compliant": true,
  "finra_approved": true,
  "state_approved": true,
  "tax_efficient": true
}"#;

pub fn temp_dir() -> Option<TempDir> {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    dir.ok()
}

pub fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let result = fs::write(&path, body);
    assert!(result.is_ok());
    path
}

pub fn data_f64(envelope: &SuccessEnvelope, pointer: &str) -> f64 {
    envelope
        .data
        .pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or(f64::NAN)
}

pub fn data_str<'a>(envelope: &'a SuccessEnvelope, pointer: &str) -> &'a str {
    envelope
        .data
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or("")
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
