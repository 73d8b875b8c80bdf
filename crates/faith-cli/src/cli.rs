use clap::{Args, Parser, Subcommand};
use faith_client::engine::roi::RoiOverrides;
use faith_client::engine::samples::SampleInvestment;

pub fn parse_non_negative_amount(value: &str) -> Result<f64, String> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| "value must be a plain number such as 250000000 or 8.5".to_string())?;

    if !parsed.is_finite() {
        return Err("value must be a finite number".to_string());
    }
    if parsed < 0.0 {
        return Err("value must not be negative".to_string());
    }
    Ok(parsed)
}

pub fn parse_sample_id(value: &str) -> Result<String, String> {
    if SampleInvestment::from_id(value).is_some() {
        return Ok(value.to_string());
    }
    Err(format!(
        "sample id must be one of: {}",
        SampleInvestment::ids().join(", ")
    ))
}

/// Extended help shown after `faith classify --help`.
pub const CLASSIFY_AFTER_HELP: &str = "\
How classify works:
  <path> is a local JSON file. Use `-` to read stdin explicitly.
  Example: cat reit.json | faith classify -
  Pass `--sample <id>` instead of a path to score a bundled investment.

Accepted documents:
  A bare scoring record, or a profile that nests the record under `scoring`:
  {
    \"id\": \"chapel-lofts\",
    \"name\": \"Chapel Lofts\",
    \"asset_class\": \"real_estate\",
    \"minimum_investment\": 75000,
    \"scoring\": { ...scoring record... }
  }

Scoring record fields (all required):
  expected_return         annual return in percent, e.g. 14.2
  risk_score              1 (low) to 10 (high)
  liquidity_score         1 to 10
  historical_performance  non-empty array of annual returns in percent
  bible_compliant         true or false
  esg_score               0 to 10
  community_impact        0 to 10
  ethical_business        true or false
  faith_leadership        true or false
  market_cap              dollars, not negative
  industry_growth         percent
  competitive_position    1 to 10
  economic_cycle          1 to 10
  sec_compliant           true or false
  finra_approved          true or false
  state_approved          true or false
  tax_efficient           true or false

  Scores outside their range are clamped before scoring.

Tiers:
  Tier 1 Premier     final >= 85
  Tier 2 Quality     final >= 70
  Tier 3 Acceptable  final >= 55
  Tier R Rejected    below 55
";

/// Extended help shown after `faith roi --help`.
pub const ROI_AFTER_HELP: &str = "\
How roi works:
  Inputs start from the built-in scenario ($500M AUM, 500 members).
  `--file <path>` (or `--file -` for stdin) overlays any subset of fields
  from a JSON object, then individual flags override both.

JSON fields:
  current_aum, member_count, portfolio_performance, current_tech_costs,
  staff_costs, management_fees, investment_manager_salary,
  analysis_time_hours, property_count

Platform packages (chosen by AUM):
  Growth               $300,000 / year     below $250M
  Professional Suite   $650,000 / year     $250M to below $1B
  Enterprise Complete  $1,400,000 / year   $1B and above
";

#[derive(Debug, Parser)]
#[command(
    name = "faith",
    version,
    about = "faith-aligned investment scoring and platform ROI",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score an investment and assign its tier and grade
    #[command(after_long_help = CLASSIFY_AFTER_HELP)]
    Classify {
        /// Path to a scoring JSON document (use `-` for stdin)
        #[arg(conflicts_with = "sample")]
        path: Option<String>,
        /// Score a bundled sample investment by id
        #[arg(long, value_parser = parse_sample_id)]
        sample: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Estimate platform ROI, payback, and package cost
    #[command(after_long_help = ROI_AFTER_HELP)]
    Roi(RoiArgs),
    /// Score kingdom impact across the five biblical principles
    Impact {
        /// Path to an impact JSON document (use `-` for stdin)
        path: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Inspect bundled sample investments
    #[command(arg_required_else_help = true)]
    Samples {
        #[command(subcommand)]
        command: SamplesCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct RoiArgs {
    /// Read ROI inputs from a JSON file, or `-` for stdin
    #[arg(long)]
    pub file: Option<String>,
    /// Assets under management in dollars
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub current_aum: Option<f64>,
    /// Number of member churches
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub member_count: Option<f64>,
    /// Current annual portfolio performance in percent
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub portfolio_performance: Option<f64>,
    /// Annual technology spend in dollars
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub current_tech_costs: Option<f64>,
    /// Annual staff cost in dollars
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub staff_costs: Option<f64>,
    /// Annual management fees in dollars
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub management_fees: Option<f64>,
    /// Annual investment manager salary in dollars
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub investment_manager_salary: Option<f64>,
    /// Weekly hours spent on investment analysis
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub analysis_time_hours: Option<f64>,
    /// Number of properties under management
    #[arg(long, value_parser = parse_non_negative_amount)]
    pub property_count: Option<f64>,
    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

impl RoiArgs {
    pub fn overrides(&self) -> RoiOverrides {
        RoiOverrides {
            current_aum: self.current_aum,
            member_count: self.member_count,
            portfolio_performance: self.portfolio_performance,
            current_tech_costs: self.current_tech_costs,
            staff_costs: self.staff_costs,
            management_fees: self.management_fees,
            investment_manager_salary: self.investment_manager_salary,
            analysis_time_hours: self.analysis_time_hours,
            property_count: self.property_count,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum SamplesCommand {
    /// List bundled sample investments with their scores
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, SamplesCommand, parse_from, parse_non_negative_amount};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 12] = [
            vec!["faith", "classify", "reit.json"],
            vec!["faith", "classify", "-", "--json"],
            vec!["faith", "classify", "--sample", "faith-reit-1"],
            vec!["faith", "classify", "--sample", "stable-bonds-3", "--json"],
            vec!["faith", "roi"],
            vec!["faith", "roi", "--json"],
            vec!["faith", "roi", "--file", "church.json"],
            vec!["faith", "roi", "--file", "-", "--current-aum", "1000000000"],
            vec!["faith", "roi", "--staff-costs", "250000", "--property-count", "3"],
            vec!["faith", "impact", "impact.json"],
            vec!["faith", "impact", "-", "--json"],
            vec!["faith", "samples", "list", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn roi_flags_become_overrides() {
        let parsed = parse_from([
            "faith",
            "roi",
            "--current-aum",
            "750000000",
            "--analysis-time-hours",
            "12.5",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::Roi(_)));
            if let Commands::Roi(args) = cli.command {
                let overrides = args.overrides();
                assert_eq!(overrides.current_aum, Some(750_000_000.0));
                assert_eq!(overrides.analysis_time_hours, Some(12.5));
                assert_eq!(overrides.staff_costs, None);
                assert!(!args.json);
            }
        }
    }

    #[test]
    fn roi_rejects_negative_and_non_finite_amounts() {
        for value in ["-1", "NaN", "inf", "lots"] {
            let flag = format!("--staff-costs={value}");
            let parsed = parse_from(["faith", "roi", flag.as_str()]);
            assert!(parsed.is_err(), "accepted {value}");
            if let Err(error) = parsed {
                assert_eq!(error.kind(), ErrorKind::ValueValidation);
            }
        }
        assert_eq!(parse_non_negative_amount(" 0 "), Ok(0.0));
    }

    #[test]
    fn classify_sample_must_be_known() {
        let parsed = parse_from(["faith", "classify", "--sample", "nope"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
            assert!(error.to_string().contains("faith-reit-1"));
        }
    }

    #[test]
    fn classify_path_conflicts_with_sample() {
        let parsed = parse_from([
            "faith",
            "classify",
            "reit.json",
            "--sample",
            "faith-reit-1",
        ]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn samples_requires_subcommand() {
        let parsed = parse_from(["faith", "samples"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(
                error.kind(),
                ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            );
        }

        let listed = parse_from(["faith", "samples", "list"]);
        assert!(listed.is_ok());
        if let Ok(cli) = listed {
            assert!(matches!(
                cli.command,
                Commands::Samples {
                    command: SamplesCommand::List { json: false }
                }
            ));
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parsed = parse_from(["faith", "guide"]);
        assert!(parsed.is_err());
    }
}
