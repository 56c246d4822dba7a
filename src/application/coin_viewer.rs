// src/application/coin_viewer.rs
use crate::application::CoinRepository;
use crate::domain::{CoinRecord, DomainError};

pub struct CoinViewer<R: CoinRepository> {
    repository: R,
}

impl<R: CoinRepository> CoinViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_coin(&mut self, coin_id: &str) -> Result<CoinRecord, DomainError> {
        self.repository.get_coin(coin_id)
    }
}
