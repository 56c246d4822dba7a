// src/application/coin_deleter.rs
use crate::application::CoinRepository;
use crate::domain::DomainError;

pub struct CoinDeleter<R: CoinRepository> {
    repository: R,
}

impl<R: CoinRepository> CoinDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a coin by id. Returns whether a record was actually removed;
    /// deleting an id that is not in the collection is a no-op.
    pub fn delete_coin(&mut self, coin_id: &str) -> Result<bool, DomainError> {
        self.repository.remove_coin(coin_id)
    }
}
