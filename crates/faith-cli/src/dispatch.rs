use faith_client::commands;
use faith_client::commands::roi::RoiRunOptions;
use faith_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, SamplesCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Classify { path, sample, .. } => match sample {
            Some(id) => commands::classify::run_sample(id),
            None => commands::classify::run(path.clone()),
        },
        Commands::Roi(args) => commands::roi::run(RoiRunOptions {
            file: args.file.clone(),
            overrides: args.overrides(),
            stdin_override: None,
        }),
        Commands::Impact { path, .. } => commands::impact::run(path.clone()),
        Commands::Samples { command } => match command {
            SamplesCommand::List { .. } => commands::samples::list(),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn dispatches_to_expected_command_names() {
        let cases: [(&[&str], &str); 3] = [
            (&["faith", "classify", "--sample", "faith-reit-1"], "classify"),
            (&["faith", "roi", "--current-aum", "300000000"], "roi"),
            (&["faith", "samples", "list"], "samples"),
        ];

        for (args, expected_command) in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                let response = dispatch(&cli);
                assert!(response.is_ok());
                if let Ok(success) = response {
                    assert_eq!(success.command, expected_command);
                }
            }
        }
    }

    #[test]
    fn roi_flags_reach_the_calculator() {
        let parsed = parse_from(["faith", "roi", "--current-aum", "1000000000"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let response = dispatch(&cli);
            assert!(response.is_ok());
            if let Ok(success) = response {
                assert_eq!(success.data["package"], "enterprise");
                assert_eq!(success.data["source"], "default_scenario");
            }
        }
    }
}
