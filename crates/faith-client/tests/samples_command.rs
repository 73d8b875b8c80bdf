mod support;

use faith_client::commands::samples;
use support::scoring_testkit::data_str;

#[test]
fn samples_list_scores_every_bundled_investment() {
    let result = samples::list();
    assert!(result.is_ok());
    if let Ok(envelope) = result {
        assert_eq!(envelope.command, "samples");
        let rows = envelope.data["rows"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 3);
        assert_eq!(data_str(&envelope, "/rows/0/id"), "faith-reit-1");
        assert_eq!(data_str(&envelope, "/rows/0/tier"), "1");
        assert_eq!(data_str(&envelope, "/rows/1/tier"), "3");
        assert_eq!(data_str(&envelope, "/rows/1/grade"), "B-");
        assert_eq!(data_str(&envelope, "/rows/2/tier_label"), "Quality");
    }
}
