use crate::cli::{Commands, SamplesCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Classify { json, .. } | Commands::Impact { json, .. } => *json,
        Commands::Roi(args) => args.json,
        Commands::Samples {
            command: SamplesCommand::List { json },
        } => *json,
    };

    if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}
