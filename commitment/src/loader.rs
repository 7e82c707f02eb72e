use std::path::Path;

use crate::review::ReviewInput;
use crate::util::errors::{CommitmentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            Some("json") => Ok(InputFormat::Json),
            other => Err(CommitmentError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

pub fn parse_review_input(content: &str, format: InputFormat) -> Result<ReviewInput> {
    let input = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(input)
}

/// Read a review input produced by the earlier wizard steps from a YAML or JSON file.
pub fn load_review_input(path: &Path) -> Result<ReviewInput> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| CommitmentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let input = parse_review_input(&content, format)?;
    tracing::info!(path = %path.display(), type_label = %input.type_label, "loaded review input");
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{variant_for_label, Variant};

    const SAFE_YAML: &str = include_str!("../fixtures/safe_review.yaml");
    const AGGRESSIVE_JSON: &str = include_str!("../fixtures/aggressive_review.json");

    #[test]
    fn test_parse_yaml_fixture() {
        let input = parse_review_input(SAFE_YAML, InputFormat::Yaml).unwrap();
        assert_eq!(input.type_label, "Safe Commitment");
        assert_eq!(input.duration_days, 30);
        assert_eq!(input.max_loss_display(), "2%");
        assert_eq!(variant_for_label(&input.type_label), Variant::Safe);
    }

    #[test]
    fn test_parse_json_fixture_without_max_loss() {
        let input = parse_review_input(AGGRESSIVE_JSON, InputFormat::Json).unwrap();
        assert_eq!(input.asset, "ETH");
        assert!(input.max_loss_percent.is_none());
        assert_eq!(input.max_loss_display(), "N/A");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.yml")).unwrap(), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.json")).unwrap(), InputFormat::Json);
        assert!(matches!(
            InputFormat::from_path(Path::new("a.csv")),
            Err(CommitmentError::UnsupportedFormat(ext)) if ext == "csv"
        ));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = parse_review_input(r#"{"type_label": "Safe"}"#, InputFormat::Json).unwrap_err();
        assert!(matches!(err, CommitmentError::Json(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_review_input(Path::new("does-not-exist.yaml")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.yaml"));
    }
}
