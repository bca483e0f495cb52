use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReclaimError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, ReclaimError>;
