// src/infrastructure/store.rs
use crate::application::CoinRepository;
use crate::domain::{CoinRecord, DomainError};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

/// Collection store backed by a single JSON document.
///
/// The whole collection is read and rewritten on every change; there is no
/// incremental append and no cross-process locking. Writes go through a
/// temp file in the same directory followed by a rename, so a failed write
/// never leaves a half-written document behind.
pub struct JsonCoinRepository {
    path: PathBuf,
}

impl JsonCoinRepository {
    pub fn new<P: AsRef<Path>>(collection_path: P) -> Result<Self> {
        let path = PathBuf::from(collection_path.as_ref());
        debug!(?path, "Creating new JsonCoinRepository");

        if path.is_dir() {
            return Err(DomainError::Storage(format!(
                "Collection path is a directory: {}",
                path.display()
            ))
            .into());
        }

        // A fresh collection has no document yet; make sure its directory exists
        // so the first save can land.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create collection directory {}", parent.display())
            })?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<CoinRecord>, DomainError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::Storage(e.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(coins) => Ok(coins),
            Err(e) => {
                // Corrupt data reads as an empty collection, not a fatal error.
                warn!(error = %e, path = %self.path.display(), "Stored collection is unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, coins: &[CoinRecord]) -> Result<(), DomainError> {
        let json = serde_json::to_string(coins).map_err(|e| DomainError::Storage(e.to_string()))?;

        let dir = self
            .path
            .parent()
            .ok_or_else(|| DomainError::Storage("Collection path has no parent directory".to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| classify_write_error(&e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| classify_write_error(&e))?;
        tmp.persist(&self.path)
            .map_err(|e| classify_write_error(&e.error))?;

        Ok(())
    }
}

/// ENOSPC-class failures mean the collection hit the storage limit and the
/// write must be reported as such; everything else is a plain storage error.
fn classify_write_error(e: &io::Error) -> DomainError {
    match e.kind() {
        io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => DomainError::QuotaExceeded,
        _ => DomainError::Storage(e.to_string()),
    }
}

impl CoinRepository for JsonCoinRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_coins(&mut self) -> Result<Vec<CoinRecord>, DomainError> {
        self.load()
    }

    #[instrument(level = "debug", skip(self))]
    fn get_coin(&mut self, id: &str) -> Result<CoinRecord, DomainError> {
        self.load()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::CoinNotFound(id.to_string()))
    }

    #[instrument(level = "debug", skip(self, coin))]
    fn add_coin(&mut self, coin: CoinRecord) -> Result<(), DomainError> {
        let mut coins = self.load()?;
        coins.insert(0, coin);
        self.persist(&coins)?;

        info!(total = coins.len(), "Saved coin to collection");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn remove_coin(&mut self, id: &str) -> Result<bool, DomainError> {
        let mut coins = self.load()?;
        let before = coins.len();
        coins.retain(|c| c.id != id);

        if coins.len() == before {
            debug!(coin_id = id, "No matching coin, collection unchanged");
            return Ok(false);
        }

        self.persist(&coins)?;
        info!(coin_id = id, remaining = coins.len(), "Removed coin from collection");
        Ok(true)
    }
}
