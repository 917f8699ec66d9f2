use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid content type `{0}` (expected blog, project or led)")]
    InvalidContentType(String),

    #[error("unsupported language `{0}` (expected ru, uz or en)")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
