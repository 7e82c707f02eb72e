use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitmentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML review input: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON review input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("unsupported review input format: {0}")]
    UnsupportedFormat(String),

    /// Carries the submission failure text verbatim so hosts can show it as-is.
    #[error("{0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, CommitmentError>;
