use thiserror::Error;

/// Structured error hierarchy for Cardfolio.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains. Classification itself never
/// surfaces errors - every oracle failure degrades to an empty result inside
/// the classifier boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("content: {0}")]
    Content(#[from] ContentError),

    // Generic fallthrough (wraps anyhow for interop)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("profile document not found at {0}")]
    NotFound(String),

    #[error("failed to read profile document: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse profile document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
