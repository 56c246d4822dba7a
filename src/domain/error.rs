// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Could not decode image: {0}")]
    ImageDecode(String),
    #[error("Could not encode image: {0}")]
    ImageEncode(String),
    #[error("Coin analysis failed: {0}")]
    Analysis(String),
    #[error("Storage limit reached. Try deleting some old coins or using smaller images.")]
    QuotaExceeded,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("A title is required before a coin can be saved")]
    MissingTitle,
    #[error("A photo is required before a coin can be saved")]
    MissingImage,
    #[error("Coin not found: {0}")]
    CoinNotFound(String),
}
