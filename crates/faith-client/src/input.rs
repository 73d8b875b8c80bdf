use std::fs;
use std::io::{IsTerminal, Read};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::engine::types::{InvestmentProfile, ScoringInput};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub source_ref: Option<String>,
    pub content: String,
}

/// Resolves exactly one JSON source: a file path, `-` for stdin, or piped
/// stdin when no path is given. `stdin_override` stands in for real stdin.
pub fn resolve_source(
    path: Option<&str>,
    stdin_override: Option<String>,
    command: &str,
) -> ClientResult<ResolvedSource> {
    let stdin_body = read_stdin(stdin_override)?;

    if let Some(path_value) = path {
        if path_value == "-" {
            if let Some(stdin_value) = stdin_body {
                return Ok(stdin_source(stdin_value));
            }
            return Err(ClientError::invalid_argument_for_command(
                "Path `-` means stdin input, but stdin was empty. Pipe a JSON document or pass a file path.",
                Some(command),
            ));
        }

        if stdin_body.is_some() {
            return Err(ClientError::invalid_argument_for_command(
                "Both stdin and file input were provided. Pass exactly one source: either a file path or piped stdin.",
                Some(command),
            ));
        }

        let content = fs::read_to_string(path_value)
            .map_err(|error| ClientError::source_unreadable(path_value, &error.to_string(), command))?;
        debug!(path = path_value, bytes = content.len(), "read input file");
        return Ok(ResolvedSource {
            kind: SourceKind::File,
            source_ref: Some(path_value.to_string()),
            content,
        });
    }

    if let Some(stdin_value) = stdin_body {
        return Ok(stdin_source(stdin_value));
    }

    Err(ClientError::invalid_argument_for_command(
        "No input source provided. Pass a file path or pipe JSON via stdin.",
        Some(command),
    ))
}

pub fn parse_document<T>(source: &ResolvedSource, command: &str) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(&source.content).map_err(|error| json_error(&error, command))
}

/// A classify document is either a bare scoring record or a full profile with
/// the record nested under `scoring`.
#[derive(Debug, Clone)]
pub enum ClassifyDocument {
    Profile(InvestmentProfile),
    Bare(ScoringInput),
}

impl ClassifyDocument {
    pub fn scoring(&self) -> &ScoringInput {
        match self {
            Self::Profile(profile) => &profile.scoring,
            Self::Bare(input) => input,
        }
    }
}

pub fn parse_classify_document(source: &ResolvedSource) -> ClientResult<ClassifyDocument> {
    let value = parse_document::<Value>(source, "classify")?;
    let is_profile = value
        .as_object()
        .is_some_and(|object| object.contains_key("scoring"));

    let parsed = if is_profile {
        serde_json::from_value::<InvestmentProfile>(value).map(ClassifyDocument::Profile)
    } else {
        serde_json::from_value::<ScoringInput>(value).map(ClassifyDocument::Bare)
    };
    parsed.map_err(|error| ClientError::document_mismatch(&error.to_string(), "classify"))
}

fn json_error(error: &serde_json::Error, command: &str) -> ClientError {
    ClientError::malformed_json(&error.to_string(), error.line(), error.column(), command)
}

fn stdin_source(content: String) -> ResolvedSource {
    ResolvedSource {
        kind: SourceKind::Stdin,
        source_ref: None,
        content,
    }
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(non_blank(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Could not read stdin: {error}"),
                vec![
                    "Retry with an explicit file path argument.".to_string(),
                    "Or rerun with valid stdin content.".to_string(),
                ],
            )
        })?;

    Ok(non_blank(buffer))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::engine::roi::RoiOverrides;

    use super::{
        ClassifyDocument, SourceKind, parse_classify_document, parse_document, resolve_source,
    };

    const BARE: &str = r#"{
  "expected_return": 9.0, "risk_score": 5, "liquidity_score": 5,
  "historical_performance": [8.0, 9.0],
  "bible_compliant": true, "esg_score": 7, "community_impact": 6,
  "ethical_business": true, "faith_leadership": false,
  "market_cap": 900000000, "industry_growth": 4.0,
  "competitive_position": 5, "economic_cycle": 5,
  "sec_compliant": true, "finra_approved": true,
  "state_approved": false, "tax_efficient": true
}"#;

    #[test]
    fn dash_reads_stdin_override() {
        let source = resolve_source(Some("-"), Some(BARE.to_string()), "classify");
        assert!(source.is_ok());
        if let Ok(resolved) = source {
            assert_eq!(resolved.kind, SourceKind::Stdin);
            assert!(resolved.source_ref.is_none());
        }
    }

    #[test]
    fn dash_with_blank_stdin_is_rejected() {
        let source = resolve_source(Some("-"), Some("   \n".to_string()), "classify");
        assert!(source.is_err());
        if let Err(error) = source {
            assert_eq!(error.code, "invalid_argument");
        }
    }

    #[test]
    fn file_and_stdin_together_are_rejected() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("input.json");
            assert!(fs::write(&path, BARE).is_ok());
            let path_text = path.display().to_string();
            let source = resolve_source(Some(&path_text), Some(BARE.to_string()), "classify");
            assert!(source.is_err());

            let source = resolve_source(Some(&path_text), Some(String::new()), "classify");
            assert!(source.is_ok());
            if let Ok(resolved) = source {
                assert_eq!(resolved.kind, SourceKind::File);
                assert_eq!(resolved.source_ref.as_deref(), Some(path_text.as_str()));
            }
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let source = resolve_source(Some("/definitely/not/here.json"), Some(String::new()), "impact");
        assert!(source.is_err());
        if let Err(error) = source {
            assert!(error.message.contains("/definitely/not/here.json"));
        }
    }

    #[test]
    fn bare_and_profile_documents_are_distinguished() {
        let bare = resolve_source(Some("-"), Some(BARE.to_string()), "classify");
        assert!(bare.is_ok());
        if let Ok(source) = bare {
            let parsed = parse_classify_document(&source);
            assert!(matches!(parsed, Ok(ClassifyDocument::Bare(_))));
        }

        let profile = format!(
            r#"{{"id":"x","name":"X","asset_class":"private_equity","minimum_investment":1000,"scoring":{BARE}}}"#
        );
        let wrapped = resolve_source(Some("-"), Some(profile), "classify");
        assert!(wrapped.is_ok());
        if let Ok(source) = wrapped {
            let parsed = parse_classify_document(&source);
            assert!(matches!(parsed, Ok(ClassifyDocument::Profile(_))));
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let body = BARE.replace("\"risk_score\"", "\"riskScore\"");
        let source = resolve_source(Some("-"), Some(body), "classify");
        assert!(source.is_ok());
        if let Ok(source) = source {
            assert!(parse_classify_document(&source).is_err());
        }
    }

    #[test]
    fn string_numbers_are_not_coerced() {
        let source = resolve_source(
            Some("-"),
            Some(r#"{"current_aum": "500000000"}"#.to_string()),
            "roi",
        );
        assert!(source.is_ok());
        if let Ok(source) = source {
            let parsed = parse_document::<RoiOverrides>(&source, "roi");
            assert!(parsed.is_err());
            if let Err(error) = parsed {
                assert!(error.data.is_some());
            }
        }
    }
}
