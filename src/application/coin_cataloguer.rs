// src/application/coin_cataloguer.rs
use crate::domain::coin::UNKNOWN_FIELD;
use crate::domain::{CoinDraft, CoinRecord, DomainError};
use chrono::Utc;
use uuid::Uuid;

pub trait CoinRepository {
    /// Current collection, newest-first.
    fn list_coins(&mut self) -> Result<Vec<CoinRecord>, DomainError>;

    fn get_coin(&mut self, id: &str) -> Result<CoinRecord, DomainError>;

    /// Prepend a record and persist the whole collection.
    fn add_coin(&mut self, coin: CoinRecord) -> Result<(), DomainError>;

    /// Remove the record with the given id and persist the result.
    /// Returns whether anything was removed; an absent id leaves the
    /// collection unchanged.
    fn remove_coin(&mut self, id: &str) -> Result<bool, DomainError>;
}

pub struct CoinCataloguer<R: CoinRepository> {
    repository: R,
}

impl<R: CoinRepository> CoinCataloguer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Turn a confirmed draft into a persisted record.
    ///
    /// Rejects drafts without a photo or a non-empty title before touching
    /// the repository. `country` and `year` default to "Unknown" when left
    /// blank. The id and creation timestamp are stamped here and never
    /// change afterwards.
    pub fn add_coin(&mut self, draft: CoinDraft) -> Result<CoinRecord, DomainError> {
        let image = draft.image.ok_or(DomainError::MissingImage)?;
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::MissingTitle);
        }

        let record = CoinRecord {
            id: Uuid::new_v4().to_string(),
            title,
            country: or_unknown(draft.country),
            year: or_unknown(draft.year),
            description: draft.description,
            image,
            composition: draft.composition,
            estimated_value: draft.estimated_value,
            date_added: Utc::now(),
        };

        self.repository.add_coin(record.clone())?;
        Ok(record)
    }
}

fn or_unknown(value: String) -> String {
    if value.trim().is_empty() {
        UNKNOWN_FIELD.to_string()
    } else {
        value
    }
}
