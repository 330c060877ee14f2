use thiserror::Error;

#[derive(Error, Debug)]
pub enum LingotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("{0}")]
    Agent(String),

    #[error("unsupported language: {0}")]
    UnknownLanguage(String),

    #[error("unsupported model: {0}")]
    UnknownModel(String),

    #[error("{0}")]
    Custom(String),
}

impl From<reqwest::Error> for LingotError {
    fn from(error: reqwest::Error) -> Self {
        LingotError::Reqwest(Box::new(error))
    }
}
