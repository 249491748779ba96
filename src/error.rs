//! Error types for the Points+ engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PointsPlusError>;

#[derive(Error, Debug)]
pub enum PointsPlusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse numeric id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },

    #[error("Unknown conference: {name}")]
    InvalidConference { name: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Data directory could not be determined; pass --data-dir or set {env_var}")]
    MissingDataDir { env_var: String },

    #[error("Upstream returned unusable data: {message}")]
    Upstream { message: String },
}

impl PointsPlusError {
    pub fn insufficient(what: impl Into<String>) -> Self {
        PointsPlusError::InsufficientData { what: what.into() }
    }
}
