//! Error types for the gallery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Token request rejected: {0}")]
    Auth(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Remote list returned no records")]
    EmptyResponse,

    #[error("No subject {subject:?} in category {category:?}")]
    UnknownSubject { category: String, subject: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timestamp error: {0}")]
    Time(#[from] time::error::Format),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
