// src/application/coin_lister.rs
use crate::application::CoinRepository;
use crate::domain::{CoinRecord, DomainError};

pub struct CoinLister<R: CoinRepository> {
    repository: R,
}

impl<R: CoinRepository> CoinLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all coins newest-first, or filter by search term.
    ///
    /// # Arguments
    /// * `search_query` - Optional term matched against title and country
    ///
    /// # Returns
    /// Vector of records matching the criteria, insertion order preserved
    pub fn list_coins(&mut self, search_query: Option<&str>) -> Result<Vec<CoinRecord>, DomainError> {
        let coins = self.repository.list_coins()?;
        Ok(match search_query {
            None => coins,
            Some(query) => coins
                .into_iter()
                .filter(|c| c.title.contains(query) || c.country.contains(query))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{sample_coin, MockCoinRepository};

    #[test]
    fn given_no_search_when_listing_coins_then_returns_all_in_stored_order() {
        // Arrange
        let mock = MockCoinRepository::builder()
            .with_coin(sample_coin("b", "Denarius", "Rome"))
            .with_coin(sample_coin("a", "Lincoln Penny", "USA"))
            .build();
        let mut lister = CoinLister::new(mock);

        // Act
        let result = lister.list_coins(None).unwrap();

        // Assert
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "a");
        assert_eq!(result[1].id, "b");
    }

    #[test]
    fn given_search_query_when_listing_coins_then_filters_by_title() {
        // Arrange
        let mock = MockCoinRepository::builder()
            .with_coin(sample_coin("1", "Lincoln Penny", "USA"))
            .with_coin(sample_coin("2", "Denarius", "Rome"))
            .build();
        let mut lister = CoinLister::new(mock);

        // Act
        let result = lister.list_coins(Some("Penny")).unwrap();

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_search_query_when_listing_coins_then_also_matches_country() {
        // Arrange
        let mock = MockCoinRepository::builder()
            .with_coin(sample_coin("1", "Lincoln Penny", "USA"))
            .with_coin(sample_coin("2", "Denarius", "Rome"))
            .build();
        let mut lister = CoinLister::new(mock);

        // Act
        let result = lister.list_coins(Some("Rome")).unwrap();

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn given_no_matches_when_listing_coins_then_returns_empty() {
        let mock = MockCoinRepository::builder()
            .with_coin(sample_coin("1", "Lincoln Penny", "USA"))
            .build();
        let mut lister = CoinLister::new(mock);

        let result = lister.list_coins(Some("Thaler")).unwrap();

        assert!(result.is_empty());
    }
}
