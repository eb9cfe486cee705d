use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogsError {
    #[error("Unrecognized url format for {domain} (\"{url}\")")]
    MalformedRepositoryUrl { domain: String, url: String },

    #[error("Operation should be an {expected} operation, got {actual}")]
    UnsupportedOperation {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Webhook call failed: {0}")]
    Webhook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChangelogsError>;
